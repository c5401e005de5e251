//! The `LetterStore` trait.
//!
//! Implemented by storage backends (e.g. `feedback-store-sqlite`) and by the
//! [`FixtureStore`](crate::fixture::FixtureStore) decorator. The HTTP layers
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::Utc;

use crate::letter::Letter;

/// Point-keyed storage for [`Letter`]s.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait LetterStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Write `letter` under its id, replacing any existing record, and return
  /// what was stored. `created_at` is always set to now by the store.
  fn persist(
    &self,
    letter: Letter,
  ) -> impl Future<Output = Result<Letter, Self::Error>> + Send + '_;

  /// Retrieve a letter by id. Returns `None` if not found.
  fn get<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Letter>, Self::Error>> + Send + 'a;

  /// Every stored letter, in no particular order.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Letter>, Self::Error>> + Send + '_;

  /// Record one delivery of the letter `id` and return the updated letter,
  /// or `None` if it does not exist.
  ///
  /// This is a plain read followed by a full write. Two concurrent calls for
  /// the same id can both read the same count, so one increment may be lost.
  fn record_send<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Letter>, Self::Error>> + Send + 'a {
    async move {
      let Some(mut letter) = self.get(id).await? else {
        return Ok(None);
      };
      letter.record_send(Utc::now());
      self.persist(letter).await.map(Some)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::MemoryStore;

  #[tokio::test]
  async fn record_send_increments_and_appends() {
    let store = MemoryStore::default();
    store
      .persist(Letter { id: "abc".into(), ..Letter::default() })
      .await
      .unwrap();

    for _ in 0..3 {
      store.record_send("abc").await.unwrap();
    }

    let letter = store.get("abc").await.unwrap().unwrap();
    assert_eq!(letter.send_count, 3);
    assert_eq!(letter.sent_receipts.len(), 3);
    assert!(letter.sent_receipts.windows(2).all(|w| w[0] <= w[1]));
  }

  #[tokio::test]
  async fn record_send_on_unknown_id_is_none() {
    let store = MemoryStore::default();
    assert!(store.record_send("nope").await.unwrap().is_none());
    assert!(store.list_all().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn record_send_resets_created_at() {
    let store = MemoryStore::default();
    let first = store
      .persist(Letter { id: "abc".into(), ..Letter::default() })
      .await
      .unwrap();

    let sent = store.record_send("abc").await.unwrap().unwrap();
    assert!(sent.created_at >= first.created_at);
    assert_eq!(sent.sent_receipts.len(), 1);
  }
}
