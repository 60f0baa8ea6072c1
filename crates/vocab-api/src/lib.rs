//! vocab-api crate
//!
//! Read-only HTTP API over the vocab word store.
//!
//! ## Endpoints
//! - `GET /words/` - All words
//! - `GET /word-of-the-day/` - One word (404 when there are none)
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl http://127.0.0.1:8000/word-of-the-day/
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::WordDto;
pub use service::{VocabApiService, VocabApiServiceFull};
