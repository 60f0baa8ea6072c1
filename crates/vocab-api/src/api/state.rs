//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::VocabApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Word service
  ///
  /// - Production: `Arc::new(VocabApiServiceFull::new(&config)?)`
  /// - Test: `VocabApiServiceFull::with_store(in-memory store)` or a stub
  pub service: Arc<dyn VocabApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn VocabApiService>) -> Self {
    Self { config, service }
  }
}
