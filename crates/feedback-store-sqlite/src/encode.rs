//! Encoding and decoding helpers between [`Letter`] and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Embedded records and the
//! receipt list are stored as compact JSON.

use chrono::{DateTime, Utc};
use feedback_core::letter::{Concern, Letter, School};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Receipts ────────────────────────────────────────────────────────────────

pub fn encode_receipts(receipts: &[DateTime<Utc>]) -> Result<String> {
  let strings: Vec<String> = receipts.iter().copied().map(encode_dt).collect();
  Ok(serde_json::to_string(&strings)?)
}

pub fn decode_receipts(s: &str) -> Result<Vec<DateTime<Utc>>> {
  let strings: Vec<String> = serde_json::from_str(s)?;
  strings.iter().map(|s| decode_dt(s)).collect()
}

// ─── Counters ────────────────────────────────────────────────────────────────

fn decode_count(column: &str, value: i64) -> Result<u32> {
  u32::try_from(value).map_err(|_| Error::OutOfRange(format!("{column} = {value}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column values ready to bind into an `INSERT`.
pub struct EncodedLetter {
  pub id:            String,
  pub email:         String,
  pub name:          String,
  pub num_children:  i64,
  pub schools:       String,
  pub concerns:      String,
  pub freeform:      String,
  pub created_at:    String,
  pub send_count:    i64,
  pub sent_receipts: String,
}

impl EncodedLetter {
  pub fn encode(letter: &Letter) -> Result<Self> {
    Ok(Self {
      id:            letter.id.clone(),
      email:         letter.email.clone(),
      name:          letter.name.clone(),
      num_children:  i64::from(letter.num_children),
      schools:       serde_json::to_string(&letter.schools)?,
      concerns:      serde_json::to_string(&letter.concerns)?,
      freeform:      letter.freeform.clone(),
      created_at:    encode_dt(letter.created_at),
      send_count:    i64::from(letter.send_count),
      sent_receipts: encode_receipts(&letter.sent_receipts)?,
    })
  }
}

/// Raw values read directly from a `letters` row.
pub struct RawLetter {
  pub id:            String,
  pub email:         String,
  pub name:          String,
  pub num_children:  i64,
  pub schools:       String,
  pub concerns:      String,
  pub freeform:      String,
  pub created_at:    String,
  pub send_count:    i64,
  pub sent_receipts: String,
}

impl RawLetter {
  /// Column list matching [`RawLetter::from_row`] positions.
  pub const COLUMNS: &'static str = "id, email, name, num_children, schools, \
                                     concerns, freeform, created_at, \
                                     send_count, sent_receipts";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      email:         row.get(1)?,
      name:          row.get(2)?,
      num_children:  row.get(3)?,
      schools:       row.get(4)?,
      concerns:      row.get(5)?,
      freeform:      row.get(6)?,
      created_at:    row.get(7)?,
      send_count:    row.get(8)?,
      sent_receipts: row.get(9)?,
    })
  }

  pub fn into_letter(self) -> Result<Letter> {
    let schools: Vec<School> = serde_json::from_str(&self.schools)?;
    let concerns: Vec<Concern> = serde_json::from_str(&self.concerns)?;

    Ok(Letter {
      id: self.id,
      email: self.email,
      name: self.name,
      num_children: decode_count("num_children", self.num_children)?,
      schools,
      concerns,
      freeform: self.freeform,
      created_at: decode_dt(&self.created_at)?,
      send_count: decode_count("send_count", self.send_count)?,
      sent_receipts: decode_receipts(&self.sent_receipts)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn receipts_survive_encoding() {
    let receipts = vec![
      Utc.with_ymd_and_hms(2020, 8, 1, 12, 0, 0).unwrap(),
      Utc.with_ymd_and_hms(2020, 8, 3, 7, 15, 30).unwrap(),
    ];
    let encoded = encode_receipts(&receipts).unwrap();
    assert_eq!(decode_receipts(&encoded).unwrap(), receipts);
  }

  #[test]
  fn bad_timestamp_is_a_date_error() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }

  #[test]
  fn negative_count_is_out_of_range() {
    assert!(matches!(decode_count("send_count", -1), Err(Error::OutOfRange(_))));
  }
}
