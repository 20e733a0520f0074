use super::Similarity;
use super::alignment::levenshtein;

/// Which string metric backs the edit signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditVariant {
    /// `1 - distance / max_len`.
    #[default]
    Levenshtein,
    /// Jaro-Winkler, favouring shared prefixes.
    JaroWinkler,
}

/// Edit-distance similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceScorer {
    variant: EditVariant,
}

impl EditDistanceScorer {
    pub fn new(variant: EditVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> EditVariant {
        self.variant
    }
}

impl Similarity for EditDistanceScorer {
    fn similarity_chars(&self, a: &[char], b: &[char]) -> f64 {
        match self.variant {
            EditVariant::Levenshtein => levenshtein_similarity(a, b),
            EditVariant::JaroWinkler => jaro_winkler_similarity(a, b),
        }
    }
}

/// Normalized Levenshtein similarity; 1.0 for two empty strings.
pub fn levenshtein_similarity(a: &[char], b: &[char]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

const WINKLER_PREFIX_SCALE: f64 = 0.1;
const WINKLER_MAX_PREFIX: usize = 4;

/// Jaro-Winkler similarity.
///
/// 1.0 for two empty strings, 0.0 when exactly one is empty.
pub fn jaro_winkler_similarity(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if !b_matched[j] && b[j] == *ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_seq = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let half_transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();

    let m = matches as f64;
    let jaro = (m / a.len() as f64
        + m / b.len() as f64
        + (m - half_transpositions as f64 / 2.0) / m)
        / 3.0;

    let prefix = a
        .iter()
        .zip(b)
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();

    jaro + WINKLER_PREFIX_SCALE * prefix as f64 * (1.0 - jaro)
}
