//! Word-of-the-day selection

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use crate::errors::{ConfigError, VocabResult};
use crate::models::Word;
use crate::store::WordStore;

/// How the word of the day is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
  /// Uniformly at random on every call
  #[default]
  Random,
  /// Same word for the whole (UTC) day, rotating through the store in id order
  Daily,
}

impl Selection {
  /// Returns the configuration spelling
  pub fn as_str(&self) -> &'static str {
    match self {
      Selection::Random => "random",
      Selection::Daily => "daily",
    }
  }
}

impl fmt::Display for Selection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Selection {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "random" => Ok(Self::Random),
      "daily" => Ok(Self::Daily),
      _ => Err(ConfigError::InvalidSelection {
        value: s.to_string(),
      }),
    }
  }
}

/// Picks the word of the day. `Ok(None)` means the store is empty.
///
/// `today` is only consulted in `Daily` mode.
pub fn pick_word(
  store: &dyn WordStore,
  selection: Selection,
  today: NaiveDate,
) -> VocabResult<Option<Word>> {
  let count = store.count()?;
  if count == 0 {
    return Ok(None);
  }

  let index = match selection {
    Selection::Random => rand::rng().random_range(0..count),
    Selection::Daily => daily_index(today, count),
  };

  debug!(%selection, index, count, "Selected word of the day");

  // A concurrent delete can shrink the table between count and fetch.
  match store.nth(index)? {
    Some(word) => Ok(Some(word)),
    None => store.nth(0),
  }
}

/// Days since the Unix epoch, modulo `count`
fn daily_index(today: NaiveDate, count: usize) -> usize {
  let days = (today - DateTime::<Utc>::UNIX_EPOCH.date_naive()).num_days();
  let count = i64::try_from(count).unwrap_or(i64::MAX);
  usize::try_from(days.rem_euclid(count)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{Level, NewWord};
  use crate::store::SqliteWordStore;

  fn store_with(n: usize) -> SqliteWordStore {
    let store = SqliteWordStore::open_in_memory().unwrap();
    for i in 0..n {
      store.create(NewWord::new(format!("Word{i}"), "d", Level::Beginner)).unwrap();
    }
    store
  }

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn selection_from_str() {
    assert_eq!("random".parse::<Selection>().unwrap(), Selection::Random);
    assert_eq!("DAILY".parse::<Selection>().unwrap(), Selection::Daily);
    assert!(matches!(
      "hourly".parse::<Selection>(),
      Err(ConfigError::InvalidSelection { .. })
    ));
  }

  #[test]
  fn empty_store_yields_none() {
    let store = store_with(0);
    for selection in [Selection::Random, Selection::Daily] {
      assert_eq!(pick_word(&store, selection, date(2026, 1, 1)).unwrap(), None);
    }
  }

  #[test]
  fn random_pick_is_a_stored_word() {
    let store = store_with(5);
    let ids: Vec<_> = store.list_all().unwrap().iter().map(|w| w.id).collect();
    for _ in 0..50 {
      let word = pick_word(&store, Selection::Random, date(2026, 1, 1)).unwrap().unwrap();
      assert!(ids.contains(&word.id));
    }
  }

  #[test]
  fn daily_pick_is_stable_within_a_day_and_rotates() {
    let store = store_with(3);
    let day = date(2026, 10, 18);
    let first = pick_word(&store, Selection::Daily, day).unwrap();
    let second = pick_word(&store, Selection::Daily, day).unwrap();
    assert_eq!(first, second);

    let next = pick_word(&store, Selection::Daily, day.succ_opt().unwrap()).unwrap();
    assert_ne!(first, next);
  }

  #[test]
  fn daily_index_counts_from_epoch() {
    assert_eq!(daily_index(date(1970, 1, 1), 7), 0);
    assert_eq!(daily_index(date(1970, 1, 8), 7), 0);
    assert_eq!(daily_index(date(1970, 1, 3), 7), 2);
    // Before the epoch still lands in range.
    assert_eq!(daily_index(date(1969, 12, 31), 7), 6);
  }
}
