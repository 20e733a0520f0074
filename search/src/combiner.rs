//! Weighted score combination and confidence bucketing.

use crate::scorer::EditVariant;
use domfuzz_core::types::{Confidence, ScoreDetails, Thresholds, Weights};

/// Merges the per-signal similarities into one bounded score.
///
/// ```text
/// raw     = edit·w_e + keyboard·w_k + phonetic·w_p
/// penalty = w_len · |len_a − len_b| / max(len_a, len_b, 1)
/// score   = clamp(raw − penalty, 0, 1)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoreCombiner {
    weights: Weights,
    thresholds: Thresholds,
}

impl ScoreCombiner {
    /// Expects validated weights and thresholds.
    pub fn new(weights: Weights, thresholds: Thresholds) -> Self {
        Self {
            weights,
            thresholds,
        }
    }

    pub fn combine(&self, details: &ScoreDetails, len_a: usize, len_b: usize) -> (f64, Confidence) {
        let w = &self.weights;
        let raw = w.edit * details.edit_distance
            + w.keyboard * details.keyboard_distance
            + w.phonetic * details.phonetic_similarity;

        let longest = len_a.max(len_b).max(1) as f64;
        let penalty = w.length_penalty * len_a.abs_diff(len_b) as f64 / longest;

        let score = (raw - penalty).clamp(0.0, 1.0);
        (score, self.classify(score))
    }

    /// Highest score any pair of these lengths can reach.
    ///
    /// Keyboard and phonetic similarity are at most `min / max` once the
    /// lengths differ, since every unmatched character is a gap column.
    /// Levenshtein similarity obeys the same ceiling; Jaro-Winkler does not.
    pub fn upper_bound(&self, len_a: usize, len_b: usize, variant: EditVariant) -> f64 {
        let w = &self.weights;
        let longest = len_a.max(len_b).max(1) as f64;
        let shortest = len_a.min(len_b) as f64;
        let ceiling = if len_a == len_b { 1.0 } else { shortest / longest };
        let edit_ceiling = match variant {
            EditVariant::Levenshtein => ceiling,
            EditVariant::JaroWinkler => 1.0,
        };

        let raw = w.edit * edit_ceiling + (w.keyboard + w.phonetic) * ceiling;
        let penalty = w.length_penalty * len_a.abs_diff(len_b) as f64 / longest;
        (raw - penalty).clamp(0.0, 1.0)
    }

    /// Buckets a score; anything under the match threshold is `None`.
    pub fn classify(&self, score: f64) -> Confidence {
        let t = &self.thresholds;
        if score >= t.high {
            Confidence::High
        } else if score >= t.medium {
            Confidence::Medium
        } else if score >= t.matching {
            Confidence::Low
        } else {
            Confidence::None
        }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }
}
