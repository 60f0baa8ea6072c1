//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::models::WordId;

/// Field-level validation errors for word records
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
  /// level is not one of Beginner / Intermediate / Advanced
  #[error("invalid level: {value:?} (valid values: Beginner, Intermediate, Advanced)")]
  InvalidLevel {
    /// The rejected value
    value: String,
  },

  /// A required text field is empty or whitespace only
  #[error("{field} must not be empty")]
  EmptyField {
    /// Name of the offending field
    field: &'static str,
  },

  /// word text exceeds the column limit
  #[error("word is too long: {length} characters (max: {max})")]
  WordTooLong {
    /// Actual length in characters
    length: usize,
    /// Allowed maximum
    max: usize,
  },
}

/// Word store errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum StoreError {
  /// SQLite operation failed
  #[error("sqlite error: {0}")]
  Sqlite(Arc<rusqlite::Error>),

  /// Could not prepare the database location
  #[error("failed to prepare database path: path={path:?}, error={source}")]
  Io {
    /// Database path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// A stored row could not be decoded into a word
  #[error("corrupt row: id={id}, reason={reason}")]
  CorruptRow {
    /// Row id
    id: WordId,
    /// What was wrong with it
    reason: String,
  },

  /// No word with this id
  #[error("word not found: id={id}")]
  WordNotFound {
    /// Requested id
    id: WordId,
  },

  /// The connection mutex was poisoned by a panicking thread
  #[error("database connection lock poisoned")]
  LockPoisoned,
}

impl From<rusqlite::Error> for StoreError {
  fn from(err: rusqlite::Error) -> Self {
    StoreError::Sqlite(Arc::new(err))
  }
}

/// Seed input errors
///
/// `FileNotFound`, `Io` and `MalformedJson` are all "malformed input": the
/// seed source could not be turned into entries, and nothing was written.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SeedError {
  /// Seed file does not exist
  #[error("seed file not found: {path:?}")]
  FileNotFound {
    /// Requested path
    path: PathBuf,
  },

  /// Seed file could not be read
  #[error("failed to read seed file: path={path:?}, error={source}")]
  Io {
    /// Requested path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// Seed file is not a JSON array of word objects
  #[error("invalid JSON in seed file: path={path:?}, error={source}")]
  MalformedJson {
    /// Requested path
    path: PathBuf,
    /// Underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// An entry failed validation; entries before it were already applied
  #[error("invalid seed entry at index {index}: {source}")]
  InvalidEntry {
    /// Zero-based position in the input
    index: usize,
    /// Validation failure
    #[source]
    source: ValidationError,
  },
}

impl SeedError {
  /// Whether the error came from reading or parsing the input (as opposed to validating it)
  #[must_use]
  pub fn is_malformed_input(&self) -> bool {
    matches!(
      self,
      SeedError::FileNotFound { .. } | SeedError::Io { .. } | SeedError::MalformedJson { .. }
    )
  }
}

/// Configuration errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// No platform data directory to place the default database in
  #[error("could not determine the data directory; set the database path explicitly")]
  DataDirNotFound,

  /// Unknown word-of-the-day selection mode
  #[error("invalid word-of-the-day selection: {value:?} (valid values: random, daily)")]
  InvalidSelection {
    /// The rejected value
    value: String,
  },

  /// `database.path` is set but empty
  #[error("database path must not be empty")]
  EmptyDatabasePath,

  /// `database.path` names an existing directory
  #[error("database path is a directory: {path:?}")]
  DatabasePathIsDirectory {
    /// The rejected path
    path: PathBuf,
  },
}

/// Unified error
///
/// Public APIs of this crate return this error through `VocabResult<T>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum VocabError {
  /// Validation error
  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// Store error
  #[error(transparent)]
  Store(#[from] StoreError),

  /// Seed error
  #[error(transparent)]
  Seed(#[from] SeedError),

  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl From<rusqlite::Error> for VocabError {
  fn from(err: rusqlite::Error) -> Self {
    VocabError::Store(err.into())
  }
}

/// Standard Result alias of the vocab crate
pub type VocabResult<T> = Result<T, VocabError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_level_message_lists_valid_values() {
    let err = ValidationError::InvalidLevel {
      value: "Expert".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("Expert"));
    assert!(msg.contains("Beginner"));
  }

  #[test]
  fn seed_error_classification() {
    let not_found = SeedError::FileNotFound {
      path: PathBuf::from("missing.json"),
    };
    assert!(not_found.is_malformed_input());

    let invalid = SeedError::InvalidEntry {
      index: 2,
      source: ValidationError::EmptyField { field: "word" },
    };
    assert!(!invalid.is_malformed_input());
    assert!(invalid.to_string().contains("index 2"));
  }

  #[test]
  fn sqlite_error_converts_to_store_error() {
    let err: VocabError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, VocabError::Store(StoreError::Sqlite(_))));
  }
}
