//! Data models

mod model_definition;

pub use model_definition::{
  Level, MAX_WORD_LENGTH, NewWord, Word, WordDefaults, WordEdit, WordId,
};
