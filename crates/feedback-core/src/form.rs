//! Raw submission input and its validation into a [`LetterForm`].
//!
//! A submission arrives either as JSON or as decoded urlencoded pairs. Both
//! land in [`LetterFormInput`], where every field is optional, and
//! [`LetterFormInput::validate`] enforces the required set.

use serde::Deserialize;

use crate::{Error, Result, letter::LetterForm};

/// The child count as submitted: a JSON number or a form string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
  Number(i64),
  Text(String),
}

impl RawCount {
  fn parse(self) -> Result<u32> {
    let n = match self {
      RawCount::Number(n) => n,
      RawCount::Text(s) if s.trim().is_empty() => {
        return Err(Error::MissingField("children"));
      }
      RawCount::Text(s) => s.trim().parse::<i64>().map_err(|e| Error::InvalidField {
        field:  "children",
        reason: e.to_string(),
      })?,
    };
    match u32::try_from(n) {
      Ok(0) => Err(Error::InvalidField {
        field:  "children",
        reason: "must be at least 1".to_owned(),
      }),
      Ok(n) => Ok(n),
      Err(_) => Err(Error::InvalidField {
        field:  "children",
        reason: format!("{n} is out of range"),
      }),
    }
  }
}

/// An unvalidated letter submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LetterFormInput {
  pub id:       Option<String>,
  pub email:    Option<String>,
  pub name:     Option<String>,
  #[serde(alias = "numChildren")]
  pub children: Option<RawCount>,
  #[serde(default, alias = "schoolSlugs")]
  pub schools:  Vec<String>,
  #[serde(default, alias = "concernSlugs")]
  pub concerns: Vec<String>,
  pub freeform: Option<String>,
}

impl LetterFormInput {
  /// Parse a JSON request body.
  pub fn from_json(body: &[u8]) -> Result<Self> { Ok(serde_json::from_slice(body)?) }

  /// Collect decoded form pairs. Repeated `schools` / `concerns` keys append;
  /// a repeated scalar key keeps the last value. Unknown keys are ignored.
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
  {
    let mut input = Self::default();
    for (key, value) in pairs {
      match key.as_ref() {
        "id" => input.id = Some(value.into()),
        "email" => input.email = Some(value.into()),
        "name" => input.name = Some(value.into()),
        "children" | "numChildren" => {
          input.children = Some(RawCount::Text(value.into()))
        }
        "schools" | "schoolSlugs" => input.schools.push(value.into()),
        "concerns" | "concernSlugs" => input.concerns.push(value.into()),
        "freeform" => input.freeform = Some(value.into()),
        _ => {}
      }
    }
    input
  }

  /// Check the required fields and produce a [`LetterForm`].
  pub fn validate(self) -> Result<LetterForm> {
    let id = required("id", self.id)?;
    let email = required("email", self.email)?;
    let name = required("name", self.name)?;
    let num_children = self
      .children
      .ok_or(Error::MissingField("children"))?
      .parse()?;

    if self.schools.is_empty() {
      return Err(Error::MissingField("schools"));
    }
    if self.concerns.is_empty() {
      return Err(Error::MissingField("concerns"));
    }

    Ok(LetterForm {
      id,
      email,
      name,
      num_children,
      school_slugs: self.schools,
      concern_slugs: self.concerns,
      freeform: self.freeform.unwrap_or_default(),
      ..LetterForm::default()
    })
  }
}

fn required(field: &'static str, value: Option<String>) -> Result<String> {
  value
    .filter(|v| !v.is_empty())
    .ok_or(Error::MissingField(field))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn complete_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
      ("id", "abc"),
      ("email", "a@b.com"),
      ("name", "A B"),
      ("children", "2"),
      ("schools", "bis"),
      ("schools", "hoover"),
      ("concerns", "no-concerns"),
    ]
  }

  #[test]
  fn pairs_with_repeated_keys_validate() {
    let form = LetterFormInput::from_pairs(complete_pairs())
      .validate()
      .unwrap();

    assert_eq!(form.id, "abc");
    assert_eq!(form.num_children, 2);
    assert_eq!(form.school_slugs, vec!["bis", "hoover"]);
    assert_eq!(form.concern_slugs, vec!["no-concerns"]);
    assert_eq!(form.freeform, "");
  }

  #[test]
  fn missing_email_is_rejected() {
    let pairs = complete_pairs().into_iter().filter(|(k, _)| *k != "email");
    let err = LetterFormInput::from_pairs(pairs).validate().unwrap_err();
    assert!(matches!(err, Error::MissingField("email")));
  }

  #[test]
  fn empty_string_counts_as_missing() {
    let mut pairs = complete_pairs();
    pairs.push(("name", ""));
    let err = LetterFormInput::from_pairs(pairs).validate().unwrap_err();
    assert!(matches!(err, Error::MissingField("name")));
  }

  #[test]
  fn no_schools_is_rejected() {
    let pairs = complete_pairs().into_iter().filter(|(k, _)| *k != "schools");
    let err = LetterFormInput::from_pairs(pairs).validate().unwrap_err();
    assert!(matches!(err, Error::MissingField("schools")));
  }

  #[test]
  fn children_must_be_a_positive_integer() {
    for bad in ["two", "0", "-1"] {
      let mut pairs = complete_pairs();
      pairs.push(("children", bad));
      let err = LetterFormInput::from_pairs(pairs).validate().unwrap_err();
      assert!(
        matches!(err, Error::InvalidField { field: "children", .. }),
        "{bad}: {err}"
      );
    }
  }

  #[test]
  fn json_accepts_wire_names_and_aliases() {
    let body = br#"{
      "id": "abc",
      "email": "a@b.com",
      "name": "A B",
      "numChildren": 2,
      "schoolSlugs": ["bis"],
      "concerns": ["no-concerns"],
      "freeform": "hello"
    }"#;
    let form = LetterFormInput::from_json(body).unwrap().validate().unwrap();

    assert_eq!(form.num_children, 2);
    assert_eq!(form.school_slugs, vec!["bis"]);
    assert_eq!(form.concern_slugs, vec!["no-concerns"]);
    assert_eq!(form.freeform, "hello");
  }

  #[test]
  fn malformed_json_is_a_serialization_error() {
    let err = LetterFormInput::from_json(b"{not json").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
  }
}
