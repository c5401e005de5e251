//! In-memory fixture letters layered in front of a real store.
//!
//! Fixtures answer point lookups only. Writes, scans and send recording go
//! straight to the wrapped store, so a fixture is never listed and never
//! mutated.

use std::collections::HashMap;

use crate::{catalog::Catalog, letter::Letter, store::LetterStore};

/// The reserved id of the demo letter.
pub const DEMO_LETTER_ID: &str = "foo";

/// The demo letter served at [`DEMO_LETTER_ID`].
pub fn demo_letter(catalog: &Catalog) -> Letter {
  Letter {
    id: DEMO_LETTER_ID.to_owned(),
    email: "foo@foo.com".to_owned(),
    name: "Froober Goober".to_owned(),
    num_children: 3,
    schools: catalog.schools().iter().skip(5).cloned().collect(),
    concerns: catalog.concerns().iter().skip(2).cloned().collect(),
    ..Letter::default()
  }
}

/// A [`LetterStore`] decorator that resolves fixture ids before the inner
/// store is consulted.
#[derive(Debug, Clone)]
pub struct FixtureStore<S> {
  inner:    S,
  fixtures: HashMap<String, Letter>,
}

impl<S> FixtureStore<S> {
  pub fn new(inner: S, fixtures: impl IntoIterator<Item = Letter>) -> Self {
    let fixtures = fixtures
      .into_iter()
      .map(|letter| (letter.id.clone(), letter))
      .collect();
    Self { inner, fixtures }
  }

  /// Wrap `inner` with only the demo letter.
  pub fn with_demo(inner: S, catalog: &Catalog) -> Self {
    Self::new(inner, [demo_letter(catalog)])
  }

  pub fn inner(&self) -> &S { &self.inner }
}

impl<S: LetterStore> LetterStore for FixtureStore<S> {
  type Error = S::Error;

  async fn persist(&self, letter: Letter) -> Result<Letter, S::Error> {
    self.inner.persist(letter).await
  }

  async fn get(&self, id: &str) -> Result<Option<Letter>, S::Error> {
    if let Some(fixture) = self.fixtures.get(id) {
      return Ok(Some(fixture.clone()));
    }
    self.inner.get(id).await
  }

  async fn list_all(&self) -> Result<Vec<Letter>, S::Error> {
    self.inner.list_all().await
  }

  async fn record_send(&self, id: &str) -> Result<Option<Letter>, S::Error> {
    self.inner.record_send(id).await
  }
}
