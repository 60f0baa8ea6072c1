//! Seeding commands

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::debug;
use vocab::seeder::{SeedOptions, SeedProgress, SeedReport, SeedSource, Seeder};
use vocab::{Level, VocabResult, WordStore};

/// `seed-from-samples`: the embedded samples, or the entries of `file`.
pub fn seed_from_samples(
  store: Arc<dyn WordStore>,
  file: Option<PathBuf>,
  clear: bool,
  out: &mut dyn Write,
) -> anyhow::Result<()> {
  let source = match file {
    Some(path) => SeedSource::File(path),
    None => SeedSource::Samples,
  };
  debug!(?source, clear, "Seeding");

  let seeder = Seeder::new(store);
  let report = print_progress(out, |on_progress| {
    seeder.seed_with_progress(&source, SeedOptions { clear }, on_progress)
  })
  .context("seeding failed")?;

  print_summary(&report, out)
}

/// `seed-placeholder`: up to `count` words from the built-in list for `level`.
pub fn seed_placeholder(
  store: Arc<dyn WordStore>,
  count: usize,
  level: Level,
  out: &mut dyn Write,
) -> anyhow::Result<()> {
  let seeder = Seeder::new(store);
  let report = print_progress(out, |on_progress| {
    seeder.seed_placeholders_with_progress(count, level, on_progress)
  })
  .context("placeholder seeding failed")?;

  print_summary(&report, out)
}

/// Runs `seed`, printing each record as it is applied.
///
/// Lines for records written before a failure are printed too.
fn print_progress<F>(out: &mut dyn Write, seed: F) -> anyhow::Result<SeedReport>
where
  F: FnOnce(&mut dyn FnMut(SeedProgress<'_>)) -> VocabResult<SeedReport>,
{
  let mut written: io::Result<()> = Ok(());
  let result = seed(&mut |progress| {
    if written.is_ok() {
      written = print_line(progress, out);
    }
  });

  let report = result?;
  written?;
  Ok(report)
}

fn print_line(progress: SeedProgress<'_>, out: &mut dyn Write) -> io::Result<()> {
  match progress {
    SeedProgress::Cleared { .. } => writeln!(out, "Cleared all existing words"),
    SeedProgress::Applied(outcome) if outcome.created => writeln!(out, "Created: {}", outcome.word),
    SeedProgress::Applied(outcome) => writeln!(out, "Already exists: {}", outcome.word),
  }
}

fn print_summary(report: &SeedReport, out: &mut dyn Write) -> anyhow::Result<()> {
  writeln!(out, "Successfully added {} new words", report.created)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use vocab::SqliteWordStore;
  use vocab::seeder::SAMPLE_COUNT;

  fn store() -> Arc<SqliteWordStore> {
    Arc::new(SqliteWordStore::open_in_memory().unwrap())
  }

  fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
  }

  #[test]
  fn samples_report_created_then_existing() {
    let store = store();

    let mut first = Vec::new();
    seed_from_samples(store.clone(), None, false, &mut first).unwrap();
    let first = output(first);
    assert!(first.contains("Created: Serendipity"));
    assert!(first.ends_with(&format!("Successfully added {SAMPLE_COUNT} new words\n")));

    let mut second = Vec::new();
    seed_from_samples(store.clone(), None, false, &mut second).unwrap();
    let second = output(second);
    assert!(second.contains("Already exists: Serendipity"));
    assert!(second.ends_with("Successfully added 0 new words\n"));
    assert_eq!(store.count().unwrap(), SAMPLE_COUNT);
  }

  #[test]
  fn clear_is_announced() {
    let mut buf = Vec::new();
    seed_from_samples(store(), None, true, &mut buf).unwrap();
    assert!(output(buf).starts_with("Cleared all existing words\n"));
  }

  #[test]
  fn missing_file_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut buf = Vec::new();
    let result = seed_from_samples(store(), Some(temp_dir.path().join("none.json")), false, &mut buf);
    assert!(result.is_err());
    assert!(buf.is_empty());
  }

  #[test]
  fn partial_file_seed_reports_committed_records() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("words.json");
    std::fs::write(
      &path,
      r#"[{"word": "Alpha", "definition": "first letter", "level": "Beginner"},
          {"word": "Beta", "definition": "second letter", "level": "Expert"}]"#,
    )
    .unwrap();

    let store = store();
    let mut buf = Vec::new();
    let result = seed_from_samples(store.clone(), Some(path), false, &mut buf);

    assert!(result.is_err());
    assert_eq!(output(buf), "Created: Alpha\n");
    assert_eq!(store.count().unwrap(), 1);
  }

  #[test]
  fn placeholders_are_reported() {
    let store = store();
    let mut buf = Vec::new();
    seed_placeholder(store.clone(), 2, Level::Advanced, &mut buf).unwrap();

    assert!(output(buf).ends_with("Successfully added 2 new words\n"));
    assert!(store.list_all().unwrap().iter().all(|w| w.level == Level::Advanced));
  }
}
