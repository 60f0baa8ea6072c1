//! clap command tree of the `vocab` binary and its dispatcher

pub mod admin;
pub mod seed;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use vocab::admin::{CreatedFilter, WordOrder};
use vocab::seeder::{DEFAULT_PLACEHOLDER_COUNT, DEFAULT_PLACEHOLDER_LEVEL};
use vocab::{Level, WordEdit, WordId, WordStore};

#[derive(Parser)]
#[command(name = "vocab")]
#[command(about = "Manage the vocabulary word store.")]
pub struct CommandLine {
  /// SQLite database file (default: <data dir>/vocab/vocab.sqlite3)
  #[arg(long, global = true, env = "VOCAB_DATABASE_PATH")]
  pub database: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Seed the built-in sample words, or the words of a JSON file
  SeedFromSamples {
    /// JSON array of {word, definition, level, example?}
    #[arg(long)]
    file: Option<PathBuf>,
    /// Delete every existing word first
    #[arg(long)]
    clear: bool,
  },
  /// Insert placeholder words from the built-in lists
  SeedPlaceholder {
    #[arg(long, default_value_t = DEFAULT_PLACEHOLDER_COUNT)]
    count: usize,
    #[arg(long, default_value_t = DEFAULT_PLACEHOLDER_LEVEL)]
    level: Level,
  },
  /// List words
  #[command(alias = "ls")]
  List {
    #[arg(long)]
    level: Option<Level>,
    /// today | past-7-days | this-month | this-year
    #[arg(long)]
    created: Option<CreatedFilter>,
    /// Terms that must all appear in word or definition
    #[arg(long, short)]
    search: Option<String>,
    /// word | -word | created | -created
    #[arg(long, default_value = "word", allow_hyphen_values = true)]
    order: WordOrder,
  },
  /// Add a word
  Add {
    #[arg(long)]
    word: String,
    #[arg(long)]
    definition: String,
    #[arg(long, default_value = "")]
    example: String,
    #[arg(long)]
    level: Level,
  },
  /// Change the word, definition, example or level of a stored word
  Edit {
    id: WordId,
    #[arg(long)]
    word: Option<String>,
    #[arg(long)]
    definition: Option<String>,
    #[arg(long)]
    example: Option<String>,
    #[arg(long)]
    level: Option<Level>,
  },
  /// Delete a word
  #[command(alias = "rm")]
  Delete { id: WordId },
}

impl CommandLine {
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Runs one command against the store, writing operator output to `out`.
pub fn run(command: Commands, store: Arc<dyn WordStore>, out: &mut dyn Write) -> anyhow::Result<()> {
  match command {
    Commands::SeedFromSamples { file, clear } => seed::seed_from_samples(store, file, clear, out),
    Commands::SeedPlaceholder { count, level } => seed::seed_placeholder(store, count, level, out),
    Commands::List {
      level,
      created,
      search,
      order,
    } => admin::list(
      store,
      admin::ListArgs {
        level,
        created,
        search,
        order,
      },
      out,
    ),
    Commands::Add {
      word,
      definition,
      example,
      level,
    } => admin::add(store, word, definition, example, level, out),
    Commands::Edit {
      id,
      word,
      definition,
      example,
      level,
    } => {
      let edit = WordEdit {
        word,
        definition,
        example,
        level,
      };
      admin::edit(store, id, &edit, out)
    }
    Commands::Delete { id } => admin::delete(store, id, out),
  }
}
