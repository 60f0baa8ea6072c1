//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use vocab::errors::{StoreError, VocabError};

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Requested resource does not exist
  NotFound,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::NotFound => "not_found",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Requested resource does not exist
  #[error("not found: {0}")]
  NotFound(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::NotFound(_) => ApiErrorKind::NotFound,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates a not-found error
  #[must_use]
  pub fn not_found(message: impl Into<String>) -> Self {
    Self::NotFound(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON shape of an error response
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Maps domain errors from the vocab crate onto API errors.
impl From<VocabError> for ApiError {
  fn from(err: VocabError) -> Self {
    match err {
      VocabError::Store(StoreError::WordNotFound { id }) => {
        ApiError::not_found(format!("word {id} does not exist"))
      }
      VocabError::Config(err) => ApiError::config(err.to_string()),
      VocabError::Store(_) | VocabError::Validation(_) | VocabError::Seed(_) => {
        ApiError::internal(err.to_string())
      }
      // VocabError is #[non_exhaustive]
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
