//! Embedded sample vocabulary

use crate::models::Level;

use super::SeedEntry;

/// (word, definition, example, level)
const SAMPLE_WORDS: [(&str, &str, &str, Level); 10] = [
  (
    "Serendipity",
    "The occurrence and development of events by chance in a happy or beneficial way",
    "A fortunate stroke of serendipity led her to discover the hidden talent.",
    Level::Advanced,
  ),
  (
    "Eloquent",
    "Fluent or persuasive in speaking or writing",
    "The speaker delivered an eloquent speech that moved the audience to tears.",
    Level::Intermediate,
  ),
  (
    "Ubiquitous",
    "Present, appearing, or found everywhere",
    "Smartphones have become ubiquitous in modern society.",
    Level::Advanced,
  ),
  (
    "Resilient",
    "Able to withstand or recover quickly from difficult conditions",
    "The community proved resilient after the natural disaster.",
    Level::Intermediate,
  ),
  (
    "Ephemeral",
    "Lasting for a very short time",
    "The beauty of cherry blossoms is ephemeral, lasting only a few weeks.",
    Level::Advanced,
  ),
  (
    "Curious",
    "Eager to know or learn something",
    "She was curious about how the machine worked.",
    Level::Beginner,
  ),
  (
    "Brave",
    "Ready to face and endure danger or pain; showing courage",
    "The brave firefighter rescued the cat from the tree.",
    Level::Beginner,
  ),
  (
    "Benevolent",
    "Well meaning and kindly",
    "The benevolent king was loved by all his subjects.",
    Level::Intermediate,
  ),
  (
    "Pragmatic",
    "Dealing with things sensibly and realistically",
    "She took a pragmatic approach to solving the budget crisis.",
    Level::Intermediate,
  ),
  (
    "Mellifluous",
    "Sweet or musical; pleasant to hear",
    "The singer's mellifluous voice captivated the audience.",
    Level::Advanced,
  ),
];

/// Number of embedded sample words
pub const SAMPLE_COUNT: usize = SAMPLE_WORDS.len();

/// The embedded sample set as seed entries
pub fn sample_entries() -> Vec<SeedEntry> {
  SAMPLE_WORDS
    .iter()
    .map(|(word, definition, example, level)| SeedEntry {
      word: (*word).to_string(),
      definition: (*definition).to_string(),
      example: Some((*example).to_string()),
      level: level.as_str().to_string(),
    })
    .collect()
}
