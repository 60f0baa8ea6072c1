//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use vocab::config::default_database_path;
use vocab::{Selection, VocabConfig};

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_SELECTION};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8000")
  pub bind_addr: String,
  /// Word store settings: database file and word-of-the-day selection
  pub vocab: VocabConfig,
}

impl Config {
  /// Creates a configuration from its parts
  pub fn new(bind_addr: impl Into<String>, vocab: VocabConfig) -> Self {
    Self {
      bind_addr: bind_addr.into(),
      vocab,
    }
  }

  /// Loads configuration from environment variables
  ///
  /// - `VOCAB_API_BIND_ADDR`
  /// - `VOCAB_DATABASE_PATH` (default: platform data dir)
  /// - `VOCAB_WORD_OF_THE_DAY` (`random` | `daily`)
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var("VOCAB_API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let database_path = match std::env::var_os("VOCAB_DATABASE_PATH") {
      Some(path) => PathBuf::from(path),
      None => default_database_path().map_err(|e| ApiError::config(e.to_string()))?,
    };

    let selection_str =
      std::env::var("VOCAB_WORD_OF_THE_DAY").unwrap_or_else(|_| DEFAULT_SELECTION.to_string());
    let selection =
      Selection::from_str(&selection_str).map_err(|e| ApiError::config(e.to_string()))?;

    let vocab = VocabConfig::with_database_path(database_path).with_selection(selection);
    vocab.validate().map_err(|e| ApiError::config(e.to_string()))?;

    Ok(Self::new(bind_addr, vocab))
  }
}
