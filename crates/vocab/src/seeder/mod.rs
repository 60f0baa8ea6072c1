//! seeder module
//!
//! Idempotent bulk insertion of words, keyed on exact word text:
//! - the embedded sample set
//! - a JSON file of word objects
//! - generated placeholder words
//!
//! Inserts are independent. If an entry fails validation the run stops there,
//! and entries before it stay in the store.

mod placeholder;
mod report;
mod samples;

pub use placeholder::{
  DEFAULT_PLACEHOLDER_COUNT, DEFAULT_PLACEHOLDER_LEVEL, placeholder_definition,
  placeholder_entries, placeholder_example, placeholder_words,
};
pub use report::{SeedOutcome, SeedProgress, SeedReport};
pub use samples::{SAMPLE_COUNT, sample_entries};

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::errors::{SeedError, VocabError, VocabResult};
use crate::models::{Level, WordDefaults};
use crate::store::WordStore;

/// One record of seed input, as found in a seed file.
///
/// `level` stays a string here so an unknown level surfaces as a validation
/// error on that entry instead of failing the whole file parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedEntry {
  /// Word text (lookup key)
  pub word: String,
  /// Definition
  pub definition: String,
  /// Optional example sentence
  #[serde(default)]
  pub example: Option<String>,
  /// Level name
  pub level: String,
}

impl SeedEntry {
  /// Converts to store defaults, validating the level
  ///
  /// # Errors
  /// `SeedError::InvalidEntry` carrying `index` if the level is unknown
  pub fn to_defaults(&self, index: usize) -> Result<WordDefaults, SeedError> {
    let level: Level =
      self.level.parse().map_err(|source| SeedError::InvalidEntry { index, source })?;

    Ok(
      WordDefaults::new(self.definition.clone())
        .with_example(self.example.clone().unwrap_or_default())
        .with_level(level),
    )
  }
}

/// Where seed records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
  /// The embedded sample set
  Samples,
  /// A JSON file: array of `{word, definition, level, example?}`
  File(PathBuf),
}

/// Options shared by seed runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOptions {
  /// Delete every existing word before inserting (no confirmation)
  pub clear: bool,
}

/// Reads and parses a seed file
///
/// # Errors
/// - `FileNotFound` if the path does not exist
/// - `Io` if it cannot be read
/// - `MalformedJson` if it is not a JSON array of word objects
pub fn load_seed_file(path: &Path) -> Result<Vec<SeedEntry>, SeedError> {
  let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
    io::ErrorKind::NotFound => SeedError::FileNotFound {
      path: path.to_path_buf(),
    },
    _ => SeedError::Io {
      path: path.to_path_buf(),
      source: Arc::new(e),
    },
  })?;

  let entries: Vec<SeedEntry> =
    serde_json::from_str(&content).map_err(|e| SeedError::MalformedJson {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

  debug!(path = %path.display(), entries = entries.len(), "Loaded seed file");
  Ok(entries)
}

/// Runs seed operations against a store
#[derive(Clone)]
pub struct Seeder {
  store: Arc<dyn WordStore>,
}

impl Seeder {
  /// Creates a seeder writing into `store`
  pub fn new(store: Arc<dyn WordStore>) -> Self {
    Self { store }
  }

  /// Deletes every word; returns how many were removed
  pub fn clear(&self) -> VocabResult<usize> {
    let removed = self.store.delete_all()?;
    warn!(removed, "Cleared all existing words");
    Ok(removed)
  }

  /// Seeds from a source.
  ///
  /// File input is read and parsed before `clear` runs, so malformed input
  /// never empties the store.
  ///
  /// # Errors
  /// - `SeedError` for unreadable/malformed files and invalid entries
  /// - Store errors
  pub fn seed(&self, source: &SeedSource, options: SeedOptions) -> VocabResult<SeedReport> {
    self.seed_with_progress(source, options, &mut |_| {})
  }

  /// Same as [`Seeder::seed`], reporting each step to `on_progress` as it
  /// happens. Records applied before an error have already been reported.
  pub fn seed_with_progress(
    &self,
    source: &SeedSource,
    options: SeedOptions,
    on_progress: &mut dyn FnMut(SeedProgress<'_>),
  ) -> VocabResult<SeedReport> {
    let entries = match source {
      SeedSource::Samples => sample_entries(),
      SeedSource::File(path) => load_seed_file(path)?,
    };

    if options.clear {
      let removed = self.clear()?;
      on_progress(SeedProgress::Cleared { removed });
    }

    self.apply_entries(&entries, on_progress)
  }

  /// Seeds the embedded sample set
  pub fn seed_samples(&self, options: SeedOptions) -> VocabResult<SeedReport> {
    self.seed(&SeedSource::Samples, options)
  }

  /// Seeds from a JSON file
  pub fn seed_file(&self, path: impl Into<PathBuf>, options: SeedOptions) -> VocabResult<SeedReport> {
    self.seed(&SeedSource::File(path.into()), options)
  }

  /// Applies entries in order with get-or-create semantics
  ///
  /// # Errors
  /// `SeedError::InvalidEntry` for the first invalid entry; earlier entries stay applied.
  pub fn seed_entries(&self, entries: &[SeedEntry]) -> VocabResult<SeedReport> {
    self.apply_entries(entries, &mut |_| {})
  }

  /// Inserts up to `count` placeholder words of `level`
  pub fn seed_placeholders(&self, count: usize, level: Level) -> VocabResult<SeedReport> {
    self.seed_placeholders_with_progress(count, level, &mut |_| {})
  }

  /// Same as [`Seeder::seed_placeholders`], reporting each record to `on_progress`
  pub fn seed_placeholders_with_progress(
    &self,
    count: usize,
    level: Level,
    on_progress: &mut dyn FnMut(SeedProgress<'_>),
  ) -> VocabResult<SeedReport> {
    info!(count, %level, "Generating placeholder words");

    let mut report = SeedReport::default();
    for (index, (word, defaults)) in placeholder_entries(count, level).into_iter().enumerate() {
      self.apply(&mut report, index, &word, defaults, on_progress)?;
    }

    info!(created = report.created, skipped = report.skipped, "Placeholder seeding finished");
    Ok(report)
  }

  fn apply_entries(
    &self,
    entries: &[SeedEntry],
    on_progress: &mut dyn FnMut(SeedProgress<'_>),
  ) -> VocabResult<SeedReport> {
    let mut report = SeedReport::default();

    for (index, entry) in entries.iter().enumerate() {
      let defaults = entry.to_defaults(index)?;
      self.apply(&mut report, index, &entry.word, defaults, on_progress)?;
    }

    info!(created = report.created, skipped = report.skipped, "Seeding finished");
    Ok(report)
  }

  fn apply(
    &self,
    report: &mut SeedReport,
    index: usize,
    text: &str,
    defaults: WordDefaults,
    on_progress: &mut dyn FnMut(SeedProgress<'_>),
  ) -> VocabResult<()> {
    let (word, created) = self.store.get_or_create(text, defaults).map_err(|e| match e {
      VocabError::Validation(source) => SeedError::InvalidEntry { index, source }.into(),
      other => other,
    })?;

    if created {
      info!(id = word.id, word = %word.word, "Created");
      report.record_created(word.word);
    } else {
      info!(id = word.id, word = %word.word, "Already exists");
      report.record_skipped(word.word);
    }

    if let Some(outcome) = report.outcomes.last() {
      on_progress(SeedProgress::Applied(outcome));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::ValidationError;
  use crate::store::SqliteWordStore;

  fn seeder() -> (Seeder, Arc<SqliteWordStore>) {
    let store = Arc::new(SqliteWordStore::open_in_memory().unwrap());
    (Seeder::new(store.clone()), store)
  }

  fn entry(word: &str, level: &str) -> SeedEntry {
    SeedEntry {
      word: word.to_string(),
      definition: format!("definition of {word}"),
      example: None,
      level: level.to_string(),
    }
  }

  #[test]
  fn entry_deserializes_without_example() {
    let json = r#"{"word": "Brave", "definition": "Showing courage", "level": "Beginner"}"#;
    let entry: SeedEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.example, None);
    assert_eq!(entry.to_defaults(0).unwrap().example, "");
  }

  #[test]
  fn seed_samples_reports_created_then_skipped() {
    let (seeder, store) = seeder();

    let first = seeder.seed_samples(SeedOptions::default()).unwrap();
    assert_eq!(first.created, SAMPLE_COUNT);
    assert!(first.is_all_created());

    let second = seeder.seed_samples(SeedOptions::default()).unwrap();
    assert_eq!(second.created, 0);
    assert_eq!(second.skipped, SAMPLE_COUNT);
    assert_eq!(store.count().unwrap(), SAMPLE_COUNT);
  }

  #[test]
  fn invalid_level_stops_after_applying_earlier_entries() {
    let (seeder, store) = seeder();
    let entries = vec![entry("Alpha", "Beginner"), entry("Beta", "Expert"), entry("Gamma", "Advanced")];

    let err = seeder.seed_entries(&entries).unwrap_err();
    match err {
      VocabError::Seed(SeedError::InvalidEntry { index, source }) => {
        assert_eq!(index, 1);
        assert!(matches!(source, ValidationError::InvalidLevel { .. }));
      }
      other => panic!("unexpected error: {other:?}"),
    }

    let words: Vec<String> = store.list_all().unwrap().into_iter().map(|w| w.word).collect();
    assert_eq!(words, vec!["Alpha"]);
  }

  #[test]
  fn progress_reports_records_applied_before_an_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("words.json");
    std::fs::write(
      &path,
      r#"[{"word": "Alpha", "definition": "first", "level": "Beginner"},
          {"word": "Beta", "definition": "second", "level": "Expert"}]"#,
    )
    .unwrap();

    let (seeder, store) = seeder();
    store.create(crate::models::NewWord::new("Old", "gone", Level::Beginner)).unwrap();

    let mut events = Vec::new();
    let result = seeder.seed_with_progress(
      &SeedSource::File(path),
      SeedOptions { clear: true },
      &mut |progress| {
        events.push(match progress {
          SeedProgress::Cleared { removed } => format!("cleared {removed}"),
          SeedProgress::Applied(outcome) => format!("{} {}", outcome.word, outcome.created),
        })
      },
    );

    assert!(matches!(result, Err(VocabError::Seed(SeedError::InvalidEntry { index: 1, .. }))));
    assert_eq!(events, vec!["cleared 1", "Alpha true"]);
    assert_eq!(store.count().unwrap(), 1);
  }

  #[test]
  fn blank_word_is_reported_as_invalid_entry() {
    let (seeder, _store) = seeder();
    let err = seeder.seed_entries(&[entry(" ", "Beginner")]).unwrap_err();
    assert!(matches!(
      err,
      VocabError::Seed(SeedError::InvalidEntry { index: 0, .. })
    ));
  }

  #[test]
  fn placeholders_skip_existing() {
    let (seeder, store) = seeder();
    seeder.seed_placeholders(2, Level::Advanced).unwrap();
    let report = seeder.seed_placeholders(4, Level::Advanced).unwrap();
    assert_eq!(report.created, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(store.count().unwrap(), 4);
  }
}
