//! [`SqliteStore`], the SQLite implementation of [`LetterStore`].

use std::path::Path;

use chrono::Utc;
use feedback_core::{letter::Letter, store::LetterStore};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{EncodedLetter, RawLetter},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A letter store backed by a single SQLite file.
///
/// Every row is scoped to `namespace`, so several deployments can share one
/// file without seeing each other's letters.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn:      tokio_rusqlite::Connection,
  namespace: String,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>, namespace: impl Into<String>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn, namespace: namespace.into() };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mostly for tests.
  pub async fn open_in_memory(namespace: impl Into<String>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn, namespace: namespace.into() };
    store.init_schema().await?;
    Ok(store)
  }

  /// A second handle onto the same connection under another namespace.
  pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
    Self { conn: self.conn.clone(), namespace: namespace.into() }
  }

  pub fn namespace(&self) -> &str { &self.namespace }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── LetterStore impl ────────────────────────────────────────────────────────

impl LetterStore for SqliteStore {
  type Error = Error;

  async fn persist(&self, mut letter: Letter) -> Result<Letter> {
    letter.created_at = Utc::now();

    let row       = EncodedLetter::encode(&letter)?;
    let namespace = self.namespace.clone();

    let written = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO letters (
             namespace, id, email, name, num_children, schools,
             concerns, freeform, created_at, send_count, sent_receipts
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
          rusqlite::params![
            namespace,
            row.id,
            row.email,
            row.name,
            row.num_children,
            row.schools,
            row.concerns,
            row.freeform,
            row.created_at,
            row.send_count,
            row.sent_receipts,
          ],
        )
        .map_err(Into::into)
      })
      .await;

    if let Err(e) = written {
      tracing::error!(id = %letter.id, error = %e, "failed to persist letter");
      return Err(e.into());
    }

    Ok(letter)
  }

  async fn get(&self, id: &str) -> Result<Option<Letter>> {
    let id        = id.to_owned();
    let namespace = self.namespace.clone();

    let raw: Option<RawLetter> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {} FROM letters WHERE namespace = ?1 AND id = ?2",
          RawLetter::COLUMNS
        );
        Ok(
          conn
            .query_row(&sql, rusqlite::params![namespace, id], RawLetter::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawLetter::into_letter).transpose()
  }

  async fn list_all(&self) -> Result<Vec<Letter>> {
    let namespace = self.namespace.clone();

    let raws: Vec<RawLetter> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {} FROM letters WHERE namespace = ?1",
          RawLetter::COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![namespace], RawLetter::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLetter::into_letter).collect()
  }
}
