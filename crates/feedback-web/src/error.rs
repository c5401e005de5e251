//! Error types and axum `IntoResponse` implementation for the HTML pages.

use askama::Template;
use axum::{
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pages::{NotFoundPage, ServerErrorPage};

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found: {0}")]
  NotFound(String),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
  #[error("render error: {0}")]
  Render(#[from] askama::Error),
}

impl Error {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Error::Store(Box::new(e))
  }
}

fn page(status: StatusCode, rendered: Result<String, askama::Error>) -> Response {
  match rendered {
    Ok(html) => (status, Html(html)).into_response(),
    Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::NotFound(message) => {
        page(StatusCode::NOT_FOUND, NotFoundPage { message: &message }.render())
      }
      Error::Store(e) => {
        let error = e.to_string();
        page(
          StatusCode::INTERNAL_SERVER_ERROR,
          ServerErrorPage { error: &error }.render(),
        )
      }
      Error::Render(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
    }
  }
}
