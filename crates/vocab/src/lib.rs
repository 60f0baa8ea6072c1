//! vocab vocabulary word library
//!
//! Word data model, SQLite-backed store, seeding routines and the
//! word-of-the-day selection shared by the HTTP API and the CLI.

/// Admin module - filtered listing and editing of words
pub mod admin;

/// Configuration module - VocabConfig and the default database location
pub mod config;

/// Error module - VocabError, VocabResult and per-area errors
pub mod errors;

/// Data model module - Word, Level and input types
pub mod models;

/// Seeder module - sample, file and placeholder seeding
pub mod seeder;

/// Store module - WordStore trait and the SQLite implementation
pub mod store;

/// Word-of-the-day selection
pub mod word_of_the_day;

/// Re-exports
pub use config::VocabConfig;
pub use errors::{VocabError, VocabResult};
pub use models::{Level, NewWord, Word, WordDefaults, WordEdit, WordId};
pub use store::{SqliteWordStore, WordStore};
pub use word_of_the_day::Selection;
