// crates/vocab/src/config.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{ConfigError, VocabResult};
use crate::store::SqliteWordStore;
use crate::word_of_the_day::Selection;

/// File name of the default database
pub const DEFAULT_DATABASE_FILE: &str = "vocab.sqlite3";

/// Top-level configuration for vocab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabConfig {
  /// [database] section
  #[serde(default)]
  pub database: DatabaseConfig,
  /// [word_of_the_day] section
  #[serde(default)]
  pub word_of_the_day: WordOfTheDayConfig,
}

/// [database] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
  /// SQLite database file.
  ///
  /// If omitted, `<data_dir>/vocab/vocab.sqlite3` is used (see [`default_database_path`]).
  #[serde(default)]
  pub path: Option<PathBuf>,
}

/// [word_of_the_day] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordOfTheDayConfig {
  /// "random" | "daily"
  #[serde(default)]
  pub selection: Selection,
}

// ===== Accessor Methods =====

impl VocabConfig {
  /// Configuration with an explicit database path and default selection
  pub fn with_database_path(path: impl Into<PathBuf>) -> Self {
    Self {
      database: DatabaseConfig {
        path: Some(path.into()),
      },
      word_of_the_day: WordOfTheDayConfig::default(),
    }
  }

  /// Builder that sets the word-of-the-day selection mode
  #[must_use]
  pub fn with_selection(mut self, selection: Selection) -> Self {
    self.word_of_the_day.selection = selection;
    self
  }

  /// Resolved database path (explicit or platform default)
  ///
  /// # Errors
  /// `ConfigError::DataDirNotFound` if no path is set and the platform has no data directory
  pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
    match &self.database.path {
      Some(path) => Ok(path.clone()),
      None => default_database_path(),
    }
  }

  /// Validates the configuration
  ///
  /// # Errors
  /// - `EmptyDatabasePath` if `database.path` is set to an empty path
  /// - `DatabasePathIsDirectory` if it names an existing directory
  pub fn validate(&self) -> Result<(), ConfigError> {
    if let Some(path) = &self.database.path {
      if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyDatabasePath);
      }
      if path.is_dir() {
        return Err(ConfigError::DatabasePathIsDirectory { path: path.clone() });
      }
    }
    Ok(())
  }

  /// Word-of-the-day selection mode
  pub fn selection(&self) -> Selection {
    self.word_of_the_day.selection
  }

  /// Opens the configured store
  ///
  /// # Errors
  /// Configuration errors from [`VocabConfig::validate`], or store errors
  pub fn open_store(&self) -> VocabResult<SqliteWordStore> {
    self.validate()?;
    SqliteWordStore::open(self.database_path()?)
  }
}

/// `<data_dir>/vocab/vocab.sqlite3`
pub fn default_database_path() -> Result<PathBuf, ConfigError> {
  let base = dirs::data_dir().ok_or(ConfigError::DataDirNotFound)?;
  Ok(base.join("vocab").join(DEFAULT_DATABASE_FILE))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::WordStore;
  use tempfile::TempDir;

  #[test]
  fn explicit_path_wins() {
    let config = VocabConfig::with_database_path("/tmp/words.db");
    assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/words.db"));
    assert_eq!(config.selection(), Selection::Random);
  }

  #[test]
  fn with_selection_keeps_database_path() {
    let config = VocabConfig::with_database_path("/tmp/words.db").with_selection(Selection::Daily);
    assert_eq!(config.selection(), Selection::Daily);
    assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/words.db"));
  }

  #[test]
  fn deserializes_with_defaults() {
    let config: VocabConfig = serde_json::from_str("{}").unwrap();
    assert!(config.database.path.is_none());
    assert_eq!(config.selection(), Selection::Random);

    let config: VocabConfig =
      serde_json::from_str(r#"{"word_of_the_day": {"selection": "daily"}}"#).unwrap();
    assert_eq!(config.selection(), Selection::Daily);
  }

  #[test]
  fn default_path_ends_with_database_file() {
    // Some CI sandboxes have no data dir; only check the shape when there is one.
    if let Ok(path) = default_database_path() {
      assert!(path.ends_with("vocab/vocab.sqlite3"));
    }
  }

  #[test]
  fn validate_rejects_empty_and_directory_paths() {
    assert!(VocabConfig::default().validate().is_ok());

    let config = VocabConfig::with_database_path("");
    assert!(matches!(config.validate(), Err(ConfigError::EmptyDatabasePath)));

    let temp_dir = TempDir::new().unwrap();
    let config = VocabConfig::with_database_path(temp_dir.path());
    assert!(matches!(
      config.validate(),
      Err(ConfigError::DatabasePathIsDirectory { .. })
    ));
    assert!(config.open_store().is_err());
  }

  #[test]
  fn open_store_creates_database() {
    let temp_dir = TempDir::new().unwrap();
    let config = VocabConfig::with_database_path(temp_dir.path().join("vocab.sqlite3"));
    let store = config.open_store().unwrap();
    assert_eq!(store.count().unwrap(), 0);
  }
}
