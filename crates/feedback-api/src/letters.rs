//! Handlers for the JSON letter endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/list-all` | Every stored letter, unordered |
//! | `POST` | `/letter/record-send/:id` | Increments the send count; 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use feedback_core::{letter::Letter, store::LetterStore};
use serde::Serialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /list-all`
pub async fn list_all<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Letter>>, ApiError>
where
  S: LetterStore,
{
  let letters = store.list_all().await.map_err(|e| {
    tracing::error!(error = %e, "failed to list letters");
    ApiError::store(e)
  })?;
  Ok(Json(letters))
}

// ─── Record send ──────────────────────────────────────────────────────────────

/// Body returned by a successful `POST /letter/record-send/:id`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendStatus {
  pub status:     &'static str,
  pub send_count: u32,
}

/// `POST /letter/record-send/:id`
pub async fn record_send<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<SendStatus>, ApiError>
where
  S: LetterStore,
{
  let letter = store
    .record_send(&id)
    .await
    .map_err(|e| {
      tracing::error!(%id, error = %e, "failed to record send");
      ApiError::store(e)
    })?
    .ok_or_else(|| ApiError::NotFound(format!("letter {id} not found")))?;

  tracing::info!(%id, send_count = letter.send_count, "recorded send");
  Ok(Json(SendStatus { status: "ok", send_count: letter.send_count }))
}
