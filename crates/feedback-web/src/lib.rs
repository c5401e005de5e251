//! HTML front end for the parent-feedback letter service.
//!
//! Serves the letter form, its preview and edit pages, and merges in the
//! JSON routes from `feedback-api`. Backed by any [`LetterStore`].

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod pages;

pub use config::{MailConfig, ServerConfig};
pub use error::Error;

use std::sync::Arc;

use axum::{Router, routing::get};
use feedback_core::{catalog::Catalog, store::LetterStore};
use tower_http::trace::TraceLayer;

use handlers::{form, letter};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all page handlers.
pub struct AppState<S: LetterStore> {
  pub store:   Arc<S>,
  pub catalog: Arc<Catalog>,
  pub config:  Arc<ServerConfig>,
}

impl<S: LetterStore> AppState<S> {
  pub fn new(store: S, catalog: Arc<Catalog>, config: ServerConfig) -> Self {
    Self {
      store: Arc::new(store),
      catalog,
      config: Arc::new(config),
    }
  }
}

impl<S: LetterStore> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:   Arc::clone(&self.store),
      catalog: Arc::clone(&self.catalog),
      config:  Arc::clone(&self.config),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application [`Router`]: pages plus the JSON API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: LetterStore + 'static,
{
  let api = feedback_api::api_router(Arc::clone(&state.store));

  Router::new()
    .route("/",                    get(form::new_letter::<S>).post(form::create_letter::<S>))
    .route("/letter/preview/{id}", get(letter::preview::<S>))
    .route("/letter/edit/{id}",    get(letter::edit::<S>))
    .with_state(state)
    .merge(api)
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
