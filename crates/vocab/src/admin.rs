//! Admin surface: filtered listing and editing of stored words.
//!
//! Mirrors a tabular back-office view:
//! - filter by level and by creation date
//! - search over `word` and `definition`: every whitespace-separated term must
//!   appear in one of them (ASCII case-insensitive)
//! - ordering by `word` ascending unless asked otherwise
//! - editing limited to `word`, `definition`, `example` and `level`

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};
use tracing::{debug, info};

use crate::errors::{StoreError, VocabResult};
use crate::models::{Level, NewWord, Word, WordEdit, WordId};
use crate::store::WordStore;

/// Creation date filter, relative to "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedFilter {
  /// Created since midnight (UTC) today
  Today,
  /// Created since midnight (UTC) seven days ago
  PastSevenDays,
  /// Created since the first day of the current month
  ThisMonth,
  /// Created since January 1st of the current year
  ThisYear,
}

impl CreatedFilter {
  /// Inclusive lower bound of `created_at` for this filter
  pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let date = match self {
      CreatedFilter::Today => today,
      CreatedFilter::PastSevenDays => today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN),
      CreatedFilter::ThisMonth => today.with_day(1).unwrap_or(today),
      CreatedFilter::ThisYear => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
    };
    date.and_time(NaiveTime::MIN).and_utc()
  }
}

impl FromStr for CreatedFilter {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "today" => Ok(Self::Today),
      "past-7-days" | "week" => Ok(Self::PastSevenDays),
      "this-month" | "month" => Ok(Self::ThisMonth),
      "this-year" | "year" => Ok(Self::ThisYear),
      _ => Err(format!(
        "Unknown created filter: {}. Valid values: today, past-7-days, this-month, this-year",
        s
      )),
    }
  }
}

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordOrder {
  /// `word` ascending
  #[default]
  WordAsc,
  /// `word` descending
  WordDesc,
  /// Oldest first
  CreatedAsc,
  /// Newest first
  CreatedDesc,
}

impl WordOrder {
  /// SQL `ORDER BY` clause body; ties are broken by id
  pub(crate) fn sql(&self) -> &'static str {
    match self {
      WordOrder::WordAsc => "word ASC, id ASC",
      WordOrder::WordDesc => "word DESC, id ASC",
      WordOrder::CreatedAsc => "created_at ASC, id ASC",
      WordOrder::CreatedDesc => "created_at DESC, id DESC",
    }
  }
}

impl FromStr for WordOrder {
  type Err = String;

  /// A leading `-` means descending, as in `-created`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "word" => Ok(Self::WordAsc),
      "-word" => Ok(Self::WordDesc),
      "created" | "created_at" => Ok(Self::CreatedAsc),
      "-created" | "-created_at" => Ok(Self::CreatedDesc),
      _ => Err(format!(
        "Unknown ordering: {}. Valid values: word, -word, created, -created",
        s
      )),
    }
  }
}

/// Admin listing query. The default lists everything ordered by word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordQuery {
  /// Only words of this level
  pub level: Option<Level>,
  /// Only words created at or after this instant
  pub created_since: Option<DateTime<Utc>>,
  /// Search terms, split on whitespace. Each term must be a substring of
  /// `word` or `definition`; case folding covers ASCII letters only.
  pub search: Option<String>,
  /// Result order
  pub order: WordOrder,
}

impl WordQuery {
  /// Builder that filters by level
  #[must_use]
  pub fn with_level(mut self, level: Level) -> Self {
    self.level = Some(level);
    self
  }

  /// Builder that filters by a relative creation date
  #[must_use]
  pub fn with_created(mut self, filter: CreatedFilter, now: DateTime<Utc>) -> Self {
    self.created_since = Some(filter.since(now));
    self
  }

  /// Builder that sets the search text; blank text means no search
  #[must_use]
  pub fn with_search(mut self, search: impl Into<String>) -> Self {
    let search = search.into();
    self.search = if search.trim().is_empty() { None } else { Some(search) };
    self
  }

  /// Builder that sets the ordering
  #[must_use]
  pub fn with_order(mut self, order: WordOrder) -> Self {
    self.order = order;
    self
  }
}

/// Back-office facade over a word store
#[derive(Clone)]
pub struct WordAdmin {
  store: Arc<dyn WordStore>,
}

impl WordAdmin {
  /// Creates the facade over the given store
  pub fn new(store: Arc<dyn WordStore>) -> Self {
    Self { store }
  }

  /// Lists words matching the query
  pub fn list(&self, query: &WordQuery) -> VocabResult<Vec<Word>> {
    debug!(?query, "Listing words");
    self.store.query(query)
  }

  /// Adds a word. Duplicates by text are allowed here.
  pub fn add(&self, new_word: NewWord) -> VocabResult<Word> {
    let word = self.store.create(new_word)?;
    info!(id = word.id, word = %word.word, "Added word");
    Ok(word)
  }

  /// Edits the editable fields of a word
  ///
  /// # Errors
  /// `StoreError::WordNotFound` if no word has this id
  pub fn edit(&self, id: WordId, edit: &WordEdit) -> VocabResult<Word> {
    let word = self.store.update(id, edit)?;
    info!(id, word = %word.word, "Edited word");
    Ok(word)
  }

  /// Deletes a word
  ///
  /// # Errors
  /// `StoreError::WordNotFound` if no word has this id
  pub fn delete(&self, id: WordId) -> VocabResult<()> {
    if !self.store.delete(id)? {
      return Err(StoreError::WordNotFound { id }.into());
    }
    info!(id, "Deleted word");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::VocabError;
  use crate::store::SqliteWordStore;
  use chrono::TimeZone;

  fn admin_with_words() -> WordAdmin {
    let store = Arc::new(SqliteWordStore::open_in_memory().unwrap());
    let admin = WordAdmin::new(store);
    admin
      .add(NewWord::new("Ubiquitous", "Present, appearing, or found everywhere", Level::Advanced))
      .unwrap();
    admin.add(NewWord::new("Brave", "Showing courage", Level::Beginner)).unwrap();
    admin
      .add(NewWord::new("Eloquent", "Fluent or persuasive in speaking", Level::Intermediate))
      .unwrap();
    admin
  }

  fn texts(words: &[Word]) -> Vec<&str> {
    words.iter().map(|w| w.word.as_str()).collect()
  }

  #[test]
  fn since_computes_day_boundaries() {
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 15, 30, 0).unwrap();
    assert_eq!(CreatedFilter::Today.since(now), Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 0).unwrap());
    assert_eq!(
      CreatedFilter::PastSevenDays.since(now),
      Utc.with_ymd_and_hms(2026, 3, 3, 0, 0, 0).unwrap()
    );
    assert_eq!(
      CreatedFilter::ThisMonth.since(now),
      Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
      CreatedFilter::ThisYear.since(now),
      Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    );
  }

  #[test]
  fn order_and_filter_parse() {
    assert_eq!("-word".parse::<WordOrder>().unwrap(), WordOrder::WordDesc);
    assert_eq!("created".parse::<WordOrder>().unwrap(), WordOrder::CreatedAsc);
    assert!("size".parse::<WordOrder>().is_err());
    assert_eq!("past-7-days".parse::<CreatedFilter>().unwrap(), CreatedFilter::PastSevenDays);
    assert!("decade".parse::<CreatedFilter>().is_err());
  }

  #[test]
  fn default_listing_is_ordered_by_word() {
    let admin = admin_with_words();
    let words = admin.list(&WordQuery::default()).unwrap();
    assert_eq!(texts(&words), vec!["Brave", "Eloquent", "Ubiquitous"]);
  }

  #[test]
  fn filters_by_level() {
    let admin = admin_with_words();
    let words = admin.list(&WordQuery::default().with_level(Level::Beginner)).unwrap();
    assert_eq!(texts(&words), vec!["Brave"]);
  }

  #[test]
  fn search_covers_word_and_definition() {
    let admin = admin_with_words();

    let by_word = admin.list(&WordQuery::default().with_search("ELOQ")).unwrap();
    assert_eq!(texts(&by_word), vec!["Eloquent"]);

    let by_definition = admin.list(&WordQuery::default().with_search("courage")).unwrap();
    assert_eq!(texts(&by_definition), vec!["Brave"]);

    let blank = WordQuery::default().with_search("   ");
    assert_eq!(blank.search, None);
  }

  #[test]
  fn search_requires_every_term() {
    let admin = admin_with_words();
    admin
      .add(NewWord::new("Serendipity", "The occurrence of events by chance", Level::Advanced))
      .unwrap();

    let hits = admin.list(&WordQuery::default().with_search("events chance")).unwrap();
    assert_eq!(texts(&hits), vec!["Serendipity"]);

    // One term in the word, the other in the definition.
    let mixed = admin.list(&WordQuery::default().with_search("  brave\tCOURAGE ")).unwrap();
    assert_eq!(texts(&mixed), vec!["Brave"]);

    // Terms found in different words match nothing.
    let split = admin.list(&WordQuery::default().with_search("courage everywhere")).unwrap();
    assert!(split.is_empty());
  }

  #[test]
  fn search_case_folding_is_ascii_only() {
    let admin = admin_with_words();
    admin.add(NewWord::new("élan", "Energy and style", Level::Advanced)).unwrap();

    assert_eq!(texts(&admin.list(&WordQuery::default().with_search("élan")).unwrap()), vec!["élan"]);
    assert_eq!(texts(&admin.list(&WordQuery::default().with_search("LAN")).unwrap()), vec!["élan"]);
    assert!(admin.list(&WordQuery::default().with_search("ÉLAN")).unwrap().is_empty());
  }

  #[test]
  fn created_filter_excludes_older_words() {
    let admin = admin_with_words();
    let now = Utc::now();

    let today = admin.list(&WordQuery::default().with_created(CreatedFilter::Today, now)).unwrap();
    assert_eq!(today.len(), 3);

    let future = WordQuery {
      created_since: Some(now + chrono::Duration::days(1)),
      ..WordQuery::default()
    };
    assert!(admin.list(&future).unwrap().is_empty());
  }

  #[test]
  fn edit_and_delete_unknown_id_fail() {
    let admin = admin_with_words();
    let edit = WordEdit {
      example: Some("x".to_string()),
      ..WordEdit::default()
    };
    assert!(matches!(
      admin.edit(999, &edit),
      Err(VocabError::Store(StoreError::WordNotFound { id: 999 }))
    ));
    assert!(matches!(
      admin.delete(999),
      Err(VocabError::Store(StoreError::WordNotFound { id: 999 }))
    ));
  }

  #[test]
  fn edit_then_delete() {
    let admin = admin_with_words();
    let brave = admin.list(&WordQuery::default().with_search("Brave")).unwrap().remove(0);

    let edited = admin
      .edit(
        brave.id,
        &WordEdit {
          example: Some("The brave firefighter rescued the cat.".to_string()),
          ..WordEdit::default()
        },
      )
      .unwrap();
    assert_eq!(edited.example, "The brave firefighter rescued the cat.");
    assert_eq!(edited.created_at, brave.created_at);

    admin.delete(brave.id).unwrap();
    assert_eq!(admin.list(&WordQuery::default()).unwrap().len(), 2);
  }
}
