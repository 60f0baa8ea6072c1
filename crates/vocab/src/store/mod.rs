//! store module
//!
//! Persistent table of vocabulary entries.

mod sqlite_store;

pub use sqlite_store::SqliteWordStore;

use crate::admin::WordQuery;
use crate::errors::VocabResult;
use crate::models::{NewWord, Word, WordDefaults, WordEdit, WordId};

/// Storage contract for words.
///
/// Consumers receive the store as `Arc<dyn WordStore>`; nothing holds a global handle.
pub trait WordStore: Send + Sync {
  /// Inserts a word. Duplicate texts are permitted at this level.
  ///
  /// # Errors
  /// - Validation error for blank or overlong fields
  /// - Store error
  fn create(&self, new_word: NewWord) -> VocabResult<Word>;

  /// Looks up a word by id
  fn get(&self, id: WordId) -> VocabResult<Option<Word>>;

  /// Returns the first word whose text equals `text` exactly, or inserts one
  /// built from `defaults`. The flag is `true` when a row was inserted.
  ///
  /// Lookup and insert happen atomically with respect to other callers of the same store.
  fn get_or_create(&self, text: &str, defaults: WordDefaults) -> VocabResult<(Word, bool)>;

  /// All words in insertion order
  fn list_all(&self) -> VocabResult<Vec<Word>>;

  /// Words matching an admin query
  fn query(&self, query: &WordQuery) -> VocabResult<Vec<Word>>;

  /// Number of stored words
  fn count(&self) -> VocabResult<usize>;

  /// The word at position `index` in insertion order, if any
  fn nth(&self, index: usize) -> VocabResult<Option<Word>>;

  /// Applies an edit to the editable fields
  ///
  /// # Errors
  /// `StoreError::WordNotFound` if no word has this id
  fn update(&self, id: WordId, edit: &WordEdit) -> VocabResult<Word>;

  /// Deletes one word; returns whether it existed
  fn delete(&self, id: WordId) -> VocabResult<bool>;

  /// Deletes every word; returns the number removed
  fn delete_all(&self) -> VocabResult<usize>;
}
