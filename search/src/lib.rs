//! Typo-tolerant matching of raw inputs against canonical domains.
//!
//! # Design
//!
//! - Three similarity signals: edit distance, keyboard proximity, and
//!   sound-alike characters, combined by fixed weights.
//! - Keyboard and phonetic signals compare characters over a shared
//!   alignment: positional for equal lengths, edit trace otherwise.
//! - Rankings are cached per normalized input and tagged with the
//!   vocabulary generation they were computed against.
//!
//! # Entry points
//!
//! - [`MatchEngine::find_matches`]: ranked candidates above the match threshold
//! - [`MatchEngine::should_redirect`]: redirect decision for the best match
//! - [`MatchEngine::analyze_input`]: matches plus a typing-error diagnosis

pub mod analysis;
mod cache;
mod combiner;
mod engine;
pub mod scorer;
mod stats;
mod typos;

pub use cache::{CachedRanking, ResultCache};
pub use combiner::ScoreCombiner;
pub use engine::MatchEngine;
pub use typos::typo_variants;

pub use domfuzz_core::types::{
    AnalysisDetails, AnalysisReport, Confidence, Confusion, Domain, ErrorKind, MatchResult,
    MatcherConfig, PhonemeClass, ScoreDetails, Statistics,
};
