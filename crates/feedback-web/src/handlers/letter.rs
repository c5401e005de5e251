//! Preview and edit pages for a stored letter.

use axum::{
  extract::{Path, State},
  response::Html,
};
use feedback_core::{letter::Letter, mapper::to_form, store::LetterStore};

use crate::{
  AppState,
  error::Error,
  pages::{EDIT_LETTER_TITLE, FormPage, PreviewPage, preview_title, render},
};

async fn find<S>(state: &AppState<S>, id: &str) -> Result<Letter, Error>
where
  S: LetterStore,
{
  state
    .store
    .get(id)
    .await
    .map_err(|e| {
      tracing::error!(%id, error = %e, "failed to load letter");
      Error::store(e)
    })?
    .ok_or_else(|| Error::NotFound(format!("letter {id} not found")))
}

/// `GET /letter/preview/:id`
pub async fn preview<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Html<String>, Error>
where
  S: LetterStore + 'static,
{
  let letter = find(&state, &id).await?;
  render(&PreviewPage {
    title:  preview_title(&letter.id),
    letter: &letter,
    mail:   &state.config.mail,
  })
}

/// `GET /letter/edit/:id`: the form, pre-filled and pre-checked.
pub async fn edit<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Html<String>, Error>
where
  S: LetterStore + 'static,
{
  let letter = find(&state, &id).await?;
  let form = to_form(&letter);
  render(&FormPage::new(EDIT_LETTER_TITLE, &state.catalog, &form))
}
