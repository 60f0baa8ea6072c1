//! Seed run report
//!
//! Tallies which records were newly created and which were already present.

use serde::{Deserialize, Serialize};

/// Result of seeding one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedOutcome {
  /// Word text as stored
  pub word: String,
  /// `true` if the record was inserted by this run
  pub created: bool,
}

/// Summary of a seed run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedReport {
  /// Number of input records processed
  pub total: usize,
  /// Newly inserted records
  pub created: usize,
  /// Records whose text already existed
  pub skipped: usize,
  /// Per-record outcomes in input order
  pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
  /// Whether every record was new (skipped == 0)
  pub fn is_all_created(&self) -> bool {
    self.skipped == 0
  }

  /// Records a newly created word
  pub fn record_created(&mut self, word: impl Into<String>) {
    self.total += 1;
    self.created += 1;
    self.outcomes.push(SeedOutcome {
      word: word.into(),
      created: true,
    });
  }

  /// Records a word that was already present
  pub fn record_skipped(&mut self, word: impl Into<String>) {
    self.total += 1;
    self.skipped += 1;
    self.outcomes.push(SeedOutcome {
      word: word.into(),
      created: false,
    });
  }
}

/// Progress notification emitted while a seed run is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedProgress<'a> {
  /// Existing words were deleted before inserting
  Cleared {
    /// Number of deleted words
    removed: usize,
  },
  /// One record was written (or found already present)
  Applied(&'a SeedOutcome),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn records_are_tallied_in_order() {
    let mut report = SeedReport::default();
    assert!(report.is_all_created());

    report.record_created("Brave");
    report.record_skipped("Curious");

    assert_eq!(report.total, 2);
    assert_eq!(report.created, 1);
    assert_eq!(report.skipped, 1);
    assert!(!report.is_all_created());
    assert_eq!(report.outcomes[0].word, "Brave");
    assert!(report.outcomes[0].created);
    assert!(!report.outcomes[1].created);
  }
}
