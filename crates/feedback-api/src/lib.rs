//! JSON endpoints for the letter service.
//!
//! Exposes an axum [`Router`] backed by any [`feedback_core::store::LetterStore`].
//! The HTML pages live in `feedback-web`, which merges this router into its
//! own.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(feedback_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod letters;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use feedback_core::store::LetterStore;

pub use error::ApiError;

/// Build the JSON router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: LetterStore + 'static,
{
  Router::new()
    .route("/list-all", get(letters::list_all::<S>))
    .route("/letter/record-send/{id}", post(letters::record_send::<S>))
    .with_state(store)
}
