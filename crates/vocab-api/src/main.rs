//! vocab-api server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vocab_api::ApiError;
use vocab_api::api::{AppState, run_server};
use vocab_api::config::Config;
use vocab_api::service::VocabApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Logging
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::from_env()?;
  tracing::info!(
    database = ?config.vocab.database.path,
    selection = %config.vocab.selection(),
    "Loaded configuration"
  );

  let service = Arc::new(VocabApiServiceFull::new(&config)?);
  tracing::info!("Opened word store");

  let state = AppState::new(config, service);

  run_server(state).await
}
