//! Core types for fuzzy domain matching.
//!
//! Holds the validated [`Domain`](types::Domain) vocabulary entry, the
//! matcher configuration, result and statistics types, and the
//! [`VocabularyStore`](vocabulary::VocabularyStore) that owns the canonical
//! set. Scoring lives in `domfuzz_search`.

pub mod error;
pub mod types;
pub mod vocabulary;

pub use error::{ConfigError, Error, Result, VocabularyError};
pub use vocabulary::VocabularyStore;
