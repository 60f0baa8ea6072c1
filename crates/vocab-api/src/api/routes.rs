//! Router definition

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, list_words, word_of_the_day};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// Both endpoints answer with and without a trailing slash.
///
/// # Arguments
/// * `state` - Application state
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/words", get(list_words))
    .route("/words/", get(list_words))
    .route("/word-of-the-day", get(word_of_the_day))
    .route("/word-of-the-day/", get(word_of_the_day))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if binding or serving fails
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {}: {}", addr, e)))?;

  tracing::info!("Starting server: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {}", e)))?;

  Ok(())
}
