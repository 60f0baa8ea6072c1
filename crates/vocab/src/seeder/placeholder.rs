//! Placeholder word generator
//!
//! Stands in for a dictionary lookup: words come from small built-in lists and
//! get template definitions that an editor is expected to replace later.

use crate::models::{Level, WordDefaults};

const BEGINNER_WORDS: &[&str] = &[
  "happy", "sad", "big", "small", "fast", "slow", "good", "bad", "hot", "cold", "old", "new",
  "easy", "hard", "light", "dark",
];

const INTERMEDIATE_WORDS: &[&str] = &[
  "analyze",
  "convince",
  "emphasize",
  "motivate",
  "organize",
  "prioritize",
  "recognize",
  "summarize",
  "demonstrate",
  "illustrate",
];

const ADVANCED_WORDS: &[&str] = &[
  "quintessential",
  "perspicacious",
  "magnanimous",
  "ineffable",
  "luminous",
  "voracious",
  "tenacious",
  "sagacious",
  "vivacious",
];

/// Default number of words requested
pub const DEFAULT_PLACEHOLDER_COUNT: usize = 10;

/// Default level requested
pub const DEFAULT_PLACEHOLDER_LEVEL: Level = Level::Intermediate;

/// The built-in word list for a level
pub fn placeholder_words(level: Level) -> &'static [&'static str] {
  match level {
    Level::Beginner => BEGINNER_WORDS,
    Level::Intermediate => INTERMEDIATE_WORDS,
    Level::Advanced => ADVANCED_WORDS,
  }
}

/// Template definition for a placeholder word
pub fn placeholder_definition(word: &str) -> String {
  format!("Definition for {word} (to be updated)")
}

/// Template example sentence for a placeholder word
pub fn placeholder_example(word: &str) -> String {
  format!("Example sentence using {word}.")
}

/// The first `count` words of the level's list (fewer if the list is shorter),
/// capitalized, with their template defaults.
pub fn placeholder_entries(count: usize, level: Level) -> Vec<(String, WordDefaults)> {
  placeholder_words(level)
    .iter()
    .take(count)
    .map(|word| {
      let defaults = WordDefaults::new(placeholder_definition(word))
        .with_example(placeholder_example(word))
        .with_level(level);
      (capitalize(word), defaults)
    })
    .collect()
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    None => String::new(),
  }
}
