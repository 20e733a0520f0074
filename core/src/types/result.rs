use super::Domain;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Confidence bucket derived from a combined score.
///
/// Variants are ordered from weakest to strongest, so `Confidence::Low <
/// Confidence::High`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    None,
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::None => write!(f, "none"),
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
        }
    }
}

/// Raw per-signal similarities, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub edit_distance: f64,
    pub keyboard_distance: f64,
    pub phonetic_similarity: f64,
}

/// One scored candidate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub domain: Domain,
    pub score: f64,
    pub confidence: Confidence,
    pub details: ScoreDetails,
}

/// Kind of divergence between an input and its best match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// A character was typed in place of another.
    Substitution,
    /// The input carries an extra character.
    Insertion,
    /// The input is missing a character.
    Deletion,
    /// Two adjacent characters are swapped.
    Transposition,
}

/// Broad articulation class of a letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeClass {
    Plosive,
    Fricative,
    Nasal,
    Liquid,
    Glide,
    Vowel,
}

/// Letters that sound close to the one typed at `position`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confusion {
    pub position: usize,
    pub original: char,
    /// Strongest first, at most three.
    pub similar: Vec<char>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    /// Length of the normalized input in characters.
    pub input_length: usize,
    pub possible_errors: BTreeSet<ErrorKind>,
    /// Indices into the normalized input, ascending.
    pub error_positions: Vec<usize>,
    /// Substitution positions where the two keys are physically adjacent.
    pub keyboard_slips: Vec<usize>,
    /// Substitution positions where the two characters sound alike.
    pub phonetic_slips: Vec<usize>,
    pub vowel_positions: Vec<usize>,
    /// Letters other than vowels; digits and punctuation are in neither list.
    pub consonant_positions: Vec<usize>,
    /// Letters of the input per phoneme class. Classes with no letters are absent.
    pub phoneme_distribution: BTreeMap<PhonemeClass, usize>,
    pub potential_confusions: Vec<Confusion>,
}

/// Full diagnostic for one input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub original_input: String,
    pub normalized_input: String,
    /// Best first.
    pub matches: Vec<MatchResult>,
    pub best_match: Option<MatchResult>,
    pub should_redirect: bool,
    pub redirect_target: Option<Domain>,
    pub analysis_details: AnalysisDetails,
}

#[cfg(test)]
mod tests;
