//! Admin commands: list, add, edit and delete

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::Utc;
use vocab::admin::{CreatedFilter, WordAdmin, WordOrder, WordQuery};
use vocab::{Level, NewWord, Word, WordEdit, WordId, WordStore};

/// Filters for `list`
#[derive(Debug, Default)]
pub struct ListArgs {
  pub level: Option<Level>,
  pub created: Option<CreatedFilter>,
  pub search: Option<String>,
  pub order: WordOrder,
}

impl ListArgs {
  fn into_query(self) -> WordQuery {
    let mut query = WordQuery::default().with_order(self.order);
    if let Some(level) = self.level {
      query = query.with_level(level);
    }
    if let Some(created) = self.created {
      query = query.with_created(created, Utc::now());
    }
    if let Some(search) = self.search {
      query = query.with_search(search);
    }
    query
  }
}

pub fn list(store: Arc<dyn WordStore>, args: ListArgs, out: &mut dyn Write) -> anyhow::Result<()> {
  let words = WordAdmin::new(store).list(&args.into_query())?;

  writeln!(out, "{:>6}  {:<24}  {:<12}  {}", "ID", "WORD", "LEVEL", "CREATED")?;
  for word in &words {
    print_row(word, out)?;
  }
  writeln!(out, "{} word(s)", words.len())?;
  Ok(())
}

pub fn add(
  store: Arc<dyn WordStore>,
  word: String,
  definition: String,
  example: String,
  level: Level,
  out: &mut dyn Write,
) -> anyhow::Result<()> {
  let new_word = NewWord::new(word, definition, level).with_example(example);
  let word = WordAdmin::new(store).add(new_word).context("could not add word")?;

  writeln!(out, "Added {}: {}", word.id, word.word)?;
  Ok(())
}

pub fn edit(store: Arc<dyn WordStore>, id: WordId, edit: &WordEdit, out: &mut dyn Write) -> anyhow::Result<()> {
  if edit.is_empty() {
    bail!("nothing to change: pass at least one of --word, --definition, --example, --level");
  }

  let word = WordAdmin::new(store)
    .edit(id, edit)
    .with_context(|| format!("could not edit word {id}"))?;

  writeln!(out, "Updated {}: {}", word.id, word.word)?;
  Ok(())
}

pub fn delete(store: Arc<dyn WordStore>, id: WordId, out: &mut dyn Write) -> anyhow::Result<()> {
  WordAdmin::new(store)
    .delete(id)
    .with_context(|| format!("could not delete word {id}"))?;

  writeln!(out, "Deleted {id}")?;
  Ok(())
}

fn print_row(word: &Word, out: &mut dyn Write) -> anyhow::Result<()> {
  writeln!(
    out,
    "{:>6}  {:<24}  {:<12}  {}",
    word.id,
    word.word,
    word.level,
    word.created_at.format("%Y-%m-%d %H:%M:%S")
  )?;
  Ok(())
}
