//! Word API Service

use std::sync::Arc;

use chrono::Utc;
use vocab::word_of_the_day::pick_word;
use vocab::{Selection, WordStore};

use crate::config::Config;
use crate::errors::{ApiError, Result};
use crate::models::WordDto;

/// Common interface for the word API service
///
/// This trait allows swapping the production implementation (`VocabApiServiceFull`) with
/// test stubs.
pub trait VocabApiService: Send + Sync {
  /// Returns every word in insertion order
  ///
  /// # Errors
  /// Internal error if the store fails
  fn list_words(&self) -> Result<Vec<WordDto>>;

  /// Returns the word of the day
  ///
  /// # Errors
  /// - `NotFound` if there are no words
  /// - Internal error if the store fails
  fn word_of_the_day(&self) -> Result<WordDto>;
}

/// Word API service backed by a word store
#[derive(Clone)]
pub struct VocabApiServiceFull {
  store: Arc<dyn WordStore>,
  selection: Selection,
}

impl VocabApiServiceFull {
  /// Opens the configured database and builds the service
  ///
  /// # Errors
  /// Returns an error if the database cannot be opened
  pub fn new(config: &Config) -> Result<Self> {
    let store = config
      .vocab
      .open_store()
      .map_err(|e| ApiError::config(format!("Failed to open database: {e}")))?;

    Ok(Self::with_store(Arc::new(store), config.vocab.selection()))
  }

  /// Builds the service over an existing store
  #[must_use]
  pub fn with_store(store: Arc<dyn WordStore>, selection: Selection) -> Self {
    Self { store, selection }
  }
}

/// Production implementation of trait `VocabApiService`
impl VocabApiService for VocabApiServiceFull {
  fn list_words(&self) -> Result<Vec<WordDto>> {
    let words = self.store.list_all()?;
    Ok(words.into_iter().map(WordDto::from).collect())
  }

  fn word_of_the_day(&self) -> Result<WordDto> {
    let today = Utc::now().date_naive();
    pick_word(self.store.as_ref(), self.selection, today)?
      .map(WordDto::from)
      .ok_or_else(|| ApiError::not_found("no words available"))
  }
}
