//! Response Model Definition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vocab::{Level, Word, WordId};

/// Word as returned by the API
///
/// Every stored field is included; `created_at` is RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDto {
  /// Identifier
  pub id: WordId,
  /// Word text
  pub word: String,
  /// Definition
  pub definition: String,
  /// Example sentence (empty string when none)
  pub example: String,
  /// "Beginner" | "Intermediate" | "Advanced"
  pub level: Level,
  /// Creation timestamp
  pub created_at: DateTime<Utc>,
}

impl From<Word> for WordDto {
  fn from(word: Word) -> Self {
    Self {
      id: word.id,
      word: word.word,
      definition: word.definition,
      example: word.example,
      level: word.level,
      created_at: word.created_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn word_dto_serialization() {
    let created_at = DateTime::parse_from_rfc3339("2026-10-18T09:30:00Z").unwrap().with_timezone(&Utc);
    let dto = WordDto::from(Word {
      id: 3,
      word: "Ephemeral".to_string(),
      definition: "Lasting for a very short time".to_string(),
      example: String::new(),
      level: Level::Advanced,
      created_at,
    });

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["word"], "Ephemeral");
    assert_eq!(json["example"], "");
    assert_eq!(json["level"], "Advanced");
    assert_eq!(json["created_at"], "2026-10-18T09:30:00Z");
  }
}
