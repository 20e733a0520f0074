//! Pairwise similarity signals.
//!
//! Each scorer maps two normalized strings to a similarity in `[0, 1]`.
//! Keyboard and phonetic scoring compare characters column by column over
//! the alignment produced by [`alignment::align`].

pub mod alignment;
mod edit;
mod keyboard;
mod phonetic;

pub use edit::{EditDistanceScorer, EditVariant, jaro_winkler_similarity, levenshtein_similarity};
pub use keyboard::{KeyboardDistanceScorer, WORST_KEY_DISTANCE, adjacent_keys, key_distance};
pub use phonetic::{
    CONFUSABLE_WEIGHT, PhoneticSimilarityScorer, SAME_CLASS_WEIGHT, confusion_table_is_symmetric,
    confusion_weight, phoneme_class, similar_chars,
};

/// A similarity signal between two strings.
pub trait Similarity: Send + Sync {
    /// Similarity of two character sequences, in `[0, 1]`.
    fn similarity_chars(&self, a: &[char], b: &[char]) -> f64;

    /// Similarity of two strings, in `[0, 1]`.
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.similarity_chars(&a, &b)
    }
}
