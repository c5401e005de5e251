//! Request extractor for letter submissions.
//!
//! Accepts `application/x-www-form-urlencoded` (the HTML form, where repeated
//! `schools` / `concerns` keys carry the selections) and `application/json`.
//! A missing content type is treated as urlencoded.

use axum::{
  body::Bytes,
  extract::{FromRequest, Request},
  http::header,
};
use feedback_api::ApiError;
use feedback_core::{form::LetterFormInput, letter::LetterForm};

/// A validated [`LetterForm`] taken from the request body.
pub struct LetterSubmission(pub LetterForm);

impl<S> FromRequest<S> for LetterSubmission
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let mime = req
      .headers()
      .get(header::CONTENT_TYPE)
      .and_then(|v| v.to_str().ok())
      .and_then(|v| v.split(';').next())
      .map(|v| v.trim().to_ascii_lowercase())
      .unwrap_or_default();

    let body = Bytes::from_request(req, state)
      .await
      .map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let input = match mime.as_str() {
      "application/json" => LetterFormInput::from_json(&body)?,
      "application/x-www-form-urlencoded" | "" => {
        LetterFormInput::from_pairs(url::form_urlencoded::parse(&body))
      }
      other => return Err(ApiError::UnsupportedMediaType(other.to_owned())),
    };

    let form = input.validate().map_err(|e| {
      tracing::warn!(error = %e, "rejected letter submission");
      ApiError::from(e)
    })?;
    Ok(Self(form))
  }
}
