//! The new-letter form and the submission handler.

use axum::{
  extract::State,
  http::{StatusCode, header},
  response::{Html, IntoResponse, Response},
};
use feedback_api::ApiError;
use feedback_core::{letter::LetterForm, mapper::to_entity, store::LetterStore};
use uuid::Uuid;

use crate::{
  AppState,
  error::Error,
  extract::LetterSubmission,
  handlers::preview_path,
  pages::{FormPage, NEW_LETTER_TITLE, render},
};

/// `GET /`: a blank form under a freshly generated id.
pub async fn new_letter<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: LetterStore + 'static,
{
  let form = LetterForm::blank(Uuid::new_v4().to_string());
  render(&FormPage::new(NEW_LETTER_TITLE, &state.catalog, &form))
}

/// `POST /`: validate, store, and redirect to the preview.
///
/// Submitting an existing id replaces that letter, which is how the edit
/// page saves.
pub async fn create_letter<S>(
  State(state): State<AppState<S>>,
  LetterSubmission(form): LetterSubmission,
) -> Result<Response, ApiError>
where
  S: LetterStore + 'static,
{
  let letter = to_entity(&state.catalog, &form);
  let letter = state.store.persist(letter).await.map_err(|e| {
    tracing::error!(id = %form.id, error = %e, "failed to save letter");
    ApiError::store(e)
  })?;

  tracing::info!(
    id = %letter.id,
    schools = letter.schools.len(),
    concerns = letter.concerns.len(),
    "saved letter"
  );
  Ok((StatusCode::FOUND, [(header::LOCATION, preview_path(&letter.id))]).into_response())
}
