//! HTTP handler definitions

use axum::{Json, extract::State};
use tracing::{debug, error};

use crate::errors::{ApiError, Result};
use crate::models::WordDto;
use crate::service::VocabApiService;

use super::state::AppState;

/// Runs a store-bound service call on the blocking pool
///
/// SQLite calls block the thread, so they must not run on the async workers.
async fn run_blocking<T, F>(state: &AppState, call: F) -> Result<T>
where
  T: Send + 'static,
  F: FnOnce(&dyn VocabApiService) -> Result<T> + Send + 'static,
{
  let service = state.service.clone();

  tokio::task::spawn_blocking(move || call(service.as_ref())).await.map_err(|e| {
    error!(error = %e, "spawn_blocking failed");
    ApiError::internal("failed to run the request")
  })?
}

/// GET /words endpoint
///
/// Returns every word as a JSON array, in insertion order.
///
/// # Response
/// - 200 OK: array of words (`[]` when there are none)
/// - 500 Internal Server Error: store failure
pub async fn list_words(State(state): State<AppState>) -> Result<Json<Vec<WordDto>>> {
  let words = run_blocking(&state, |service| service.list_words()).await?;

  debug!(count = words.len(), "Listed words");

  Ok(Json(words))
}

/// GET /word-of-the-day endpoint
///
/// # Response
/// - 200 OK: one word
/// - 404 Not Found: the store is empty
/// - 500 Internal Server Error: store failure
pub async fn word_of_the_day(State(state): State<AppState>) -> Result<Json<WordDto>> {
  let word = run_blocking(&state, |service| service.word_of_the_day()).await?;

  debug!(id = word.id, word = %word.word, "Selected word of the day");

  Ok(Json(word))
}

/// Health check endpoint
///
/// Confirms that the server is running.
pub async fn health_check() -> &'static str {
  "OK"
}
