//! Data Model Definition
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Maximum length of the `word` text, in characters.
pub const MAX_WORD_LENGTH: usize = 100;

/// Row identifier of a stored word
pub type WordId = i64;

/// Difficulty classification of a word.
///
/// Serialized with exactly the variant names (`"Beginner"`, `"Intermediate"`, `"Advanced"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
  /// Everyday words
  Beginner,
  /// Common but less basic words
  Intermediate,
  /// Rare or literary words
  Advanced,
}

impl Level {
  /// All levels, easiest first
  pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

  /// Returns the canonical spelling stored in the database and used in JSON
  pub fn as_str(&self) -> &'static str {
    match self {
      Level::Beginner => "Beginner",
      Level::Intermediate => "Intermediate",
      Level::Advanced => "Advanced",
    }
  }
}

impl fmt::Display for Level {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Level {
  type Err = ValidationError;

  /// Case-insensitive; surrounding whitespace is ignored.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "beginner" => Ok(Level::Beginner),
      "intermediate" => Ok(Level::Intermediate),
      "advanced" => Ok(Level::Advanced),
      _ => Err(ValidationError::InvalidLevel {
        value: s.to_string(),
      }),
    }
  }
}

/// A stored vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
  /// Stable identifier assigned at creation
  pub id: WordId,
  /// The word itself
  pub word: String,
  /// Free-text definition
  pub definition: String,
  /// Example sentence (may be empty)
  pub example: String,
  /// Difficulty level
  pub level: Level,
  /// Creation timestamp, never modified
  pub created_at: DateTime<Utc>,
}

impl fmt::Display for Word {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.word)
  }
}

/// Input for creating a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWord {
  /// The word itself
  pub word: String,
  /// Free-text definition
  pub definition: String,
  /// Example sentence
  pub example: String,
  /// Difficulty level
  pub level: Level,
}

impl NewWord {
  /// Creates a new word input with an empty example
  pub fn new(word: impl Into<String>, definition: impl Into<String>, level: Level) -> Self {
    Self {
      word: word.into(),
      definition: definition.into(),
      example: String::new(),
      level,
    }
  }

  /// Builder that sets the example sentence
  #[must_use]
  pub fn with_example(mut self, example: impl Into<String>) -> Self {
    self.example = example.into();
    self
  }

  /// Checks required fields and the word length limit
  ///
  /// # Errors
  /// - `EmptyField` if `word` or `definition` is blank
  /// - `WordTooLong` if `word` exceeds [`MAX_WORD_LENGTH`] characters
  pub fn validate(&self) -> Result<(), ValidationError> {
    validate_word_text(&self.word)?;
    validate_definition(&self.definition)
  }
}

/// Values used for the non-key fields when `get_or_create` has to insert.
///
/// `example` defaults to an empty string and `level` to `Intermediate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDefaults {
  /// Definition to store
  pub definition: String,
  /// Example sentence to store
  pub example: String,
  /// Level to store
  pub level: Level,
}

impl WordDefaults {
  /// Defaults with the given definition, empty example and `Intermediate` level
  pub fn new(definition: impl Into<String>) -> Self {
    Self {
      definition: definition.into(),
      example: String::new(),
      level: Level::Intermediate,
    }
  }

  /// Builder that sets the example sentence
  #[must_use]
  pub fn with_example(mut self, example: impl Into<String>) -> Self {
    self.example = example.into();
    self
  }

  /// Builder that sets the level
  #[must_use]
  pub fn with_level(mut self, level: Level) -> Self {
    self.level = level;
    self
  }

  /// Combines these defaults with the key text into a full input record
  pub fn into_new_word(self, word: impl Into<String>) -> NewWord {
    NewWord {
      word: word.into(),
      definition: self.definition,
      example: self.example,
      level: self.level,
    }
  }
}

/// Partial update of the editable fields.
///
/// `created_at` and `id` are system-managed and cannot be edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordEdit {
  /// New word text
  pub word: Option<String>,
  /// New definition
  pub definition: Option<String>,
  /// New example sentence
  pub example: Option<String>,
  /// New level
  pub level: Option<Level>,
}

impl WordEdit {
  /// True when no field is set
  pub fn is_empty(&self) -> bool {
    self.word.is_none() && self.definition.is_none() && self.example.is_none() && self.level.is_none()
  }

  /// Validates the fields that are set
  ///
  /// # Errors
  /// Same rules as [`NewWord::validate`], applied only to present fields.
  pub fn validate(&self) -> Result<(), ValidationError> {
    if let Some(word) = &self.word {
      validate_word_text(word)?;
    }
    if let Some(definition) = &self.definition {
      validate_definition(definition)?;
    }
    Ok(())
  }

  /// Applies the set fields onto an existing word
  pub fn apply_to(&self, word: &mut Word) {
    if let Some(text) = &self.word {
      word.word = text.clone();
    }
    if let Some(definition) = &self.definition {
      word.definition = definition.clone();
    }
    if let Some(example) = &self.example {
      word.example = example.clone();
    }
    if let Some(level) = self.level {
      word.level = level;
    }
  }
}

fn validate_word_text(word: &str) -> Result<(), ValidationError> {
  if word.trim().is_empty() {
    return Err(ValidationError::EmptyField { field: "word" });
  }
  let length = word.chars().count();
  if length > MAX_WORD_LENGTH {
    return Err(ValidationError::WordTooLong {
      length,
      max: MAX_WORD_LENGTH,
    });
  }
  Ok(())
}

fn validate_definition(definition: &str) -> Result<(), ValidationError> {
  if definition.trim().is_empty() {
    return Err(ValidationError::EmptyField { field: "definition" });
  }
  Ok(())
}
