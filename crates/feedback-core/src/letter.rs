//! Letter types: the persisted entity and the form view-model.
//!
//! A [`Letter`] embeds full copies of the schools and concerns chosen at
//! submission time. A [`LetterForm`] carries only slugs, which is what the
//! HTML form posts and what the edit view needs to pre-check its controls.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Reference records ───────────────────────────────────────────────────────

/// A school in the district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
  pub name: String,
  pub slug: String,
}

/// A pre-written concern a parent can attach to their letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concern {
  pub title:       String,
  /// Trusted markup; rendered without escaping.
  pub description: String,
  pub slug:        String,
}

// ─── Letter ──────────────────────────────────────────────────────────────────

/// A submitted letter as it is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
  pub id:            String,
  pub email:         String,
  pub name:          String,
  pub num_children:  u32,
  /// Copies of the catalog entries as of submission, not references.
  pub schools:       Vec<School>,
  pub concerns:      Vec<Concern>,
  pub freeform:      String,
  /// Server-assigned; reset on every persist.
  pub created_at:    DateTime<Utc>,
  pub send_count:    u32,
  pub sent_receipts: Vec<DateTime<Utc>>,
}

impl Letter {
  /// Mark one more delivery of this letter at `at`.
  ///
  /// Keeps `send_count == sent_receipts.len()` provided it held before.
  pub fn record_send(&mut self, at: DateTime<Utc>) {
    self.send_count += 1;
    self.sent_receipts.push(at);
  }
}

// ─── LetterForm ──────────────────────────────────────────────────────────────

/// The flat shape used by the create and edit views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterForm {
  pub id:               String,
  pub email:            String,
  pub name:             String,
  pub num_children:     u32,
  pub school_slugs:     Vec<String>,
  pub concern_slugs:    Vec<String>,
  pub freeform:         String,
  /// Populated only by [`crate::mapper::to_form`].
  #[serde(skip)]
  pub schools_checked:  HashMap<String, bool>,
  #[serde(skip)]
  pub concerns_checked: HashMap<String, bool>,
}

impl LetterForm {
  /// A blank form carrying only the client-side identifier.
  pub fn blank(id: impl Into<String>) -> Self {
    Self { id: id.into(), ..Self::default() }
  }

  pub fn is_school_checked(&self, slug: &str) -> bool {
    self.schools_checked.get(slug).copied().unwrap_or(false)
  }

  pub fn is_concern_checked(&self, slug: &str) -> bool {
    self.concerns_checked.get(slug).copied().unwrap_or(false)
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn record_send_keeps_count_and_receipts_in_step() {
    let mut letter = Letter { id: "abc".into(), ..Letter::default() };
    let t1 = Utc.with_ymd_and_hms(2020, 8, 1, 12, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2020, 8, 2, 9, 30, 0).unwrap();

    letter.record_send(t1);
    letter.record_send(t2);

    assert_eq!(letter.send_count, 2);
    assert_eq!(letter.sent_receipts, vec![t1, t2]);
  }

  #[test]
  fn letter_serialises_with_camel_case_keys() {
    let letter = Letter { id: "abc".into(), num_children: 2, ..Letter::default() };
    let json = serde_json::to_value(&letter).unwrap();

    assert_eq!(json["numChildren"], 2);
    assert_eq!(json["sendCount"], 0);
    assert!(json.get("sentReceipts").is_some());
    assert!(json.get("createdAt").is_some());
  }

  #[test]
  fn blank_form_checks_nothing() {
    let form = LetterForm::blank("some-id");
    assert_eq!(form.id, "some-id");
    assert!(!form.is_school_checked("bis"));
    assert!(!form.is_concern_checked("no-concerns"));
  }
}
