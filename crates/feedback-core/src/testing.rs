//! A `HashMap`-backed [`LetterStore`] for unit tests.

use std::{collections::HashMap, convert::Infallible, sync::Mutex};

use chrono::Utc;

use crate::{letter::Letter, store::LetterStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
  letters: Mutex<HashMap<String, Letter>>,
}

impl LetterStore for MemoryStore {
  type Error = Infallible;

  async fn persist(&self, mut letter: Letter) -> Result<Letter, Infallible> {
    letter.created_at = Utc::now();
    self
      .letters
      .lock()
      .unwrap()
      .insert(letter.id.clone(), letter.clone());
    Ok(letter)
  }

  async fn get(&self, id: &str) -> Result<Option<Letter>, Infallible> {
    Ok(self.letters.lock().unwrap().get(id).cloned())
  }

  async fn list_all(&self) -> Result<Vec<Letter>, Infallible> {
    Ok(self.letters.lock().unwrap().values().cloned().collect())
  }
}
