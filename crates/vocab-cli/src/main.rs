//! `vocab` management commands

mod commands;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::CommandLine;
use vocab::{VocabConfig, WordStore};

fn main() -> anyhow::Result<()> {
  // Logs go to stderr; stdout carries command output
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let cli = CommandLine::parse_args();

  let config = match cli.database {
    Some(path) => VocabConfig::with_database_path(path),
    None => VocabConfig::default(),
  };
  let path = config.database_path()?;
  info!(path = %path.display(), "Opening word store");

  let store: Arc<dyn WordStore> = Arc::new(
    config
      .open_store()
      .with_context(|| format!("could not open {}", path.display()))?,
  );

  let stdout = std::io::stdout();
  commands::run(cli.command, store, &mut stdout.lock())
}
