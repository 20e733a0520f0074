use super::Similarity;
use super::alignment::{Column, align};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Distance charged for gaps, off-layout characters, and far-apart keys.
pub const WORST_KEY_DISTANCE: f64 = 10.0;

/// Unshifted QWERTY rows, without stagger.
const QWERTY_ROWS: [&str; 4] = ["1234567890-", "qwertyuiop", "asdfghjkl", "zxcvbnm,."];

static KEY_POSITIONS: LazyLock<HashMap<char, (f64, f64)>> = LazyLock::new(|| {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .flat_map(|(row, keys)| {
            keys.chars()
                .enumerate()
                .map(move |(col, key)| (key, (row as f64, col as f64)))
        })
        .collect()
});

/// Euclidean distance between two keys, capped at [`WORST_KEY_DISTANCE`].
///
/// Identical characters are always 0, even when off the layout.
pub fn key_distance(a: char, b: char) -> f64 {
    if a == b {
        return 0.0;
    }
    let a = a.to_ascii_lowercase();
    let b = b.to_ascii_lowercase();
    match (KEY_POSITIONS.get(&a), KEY_POSITIONS.get(&b)) {
        (Some(&(r1, c1)), Some(&(r2, c2))) => {
            ((r1 - r2).powi(2) + (c1 - c2).powi(2))
                .sqrt()
                .min(WORST_KEY_DISTANCE)
        }
        _ => WORST_KEY_DISTANCE,
    }
}

/// Keys within `max_distance` of `key`, nearest first, ties by character.
pub fn adjacent_keys(key: char, max_distance: f64) -> Vec<char> {
    let key = key.to_ascii_lowercase();
    if !KEY_POSITIONS.contains_key(&key) {
        return Vec::new();
    }

    let mut near: Vec<(char, f64)> = KEY_POSITIONS
        .keys()
        .filter(|&&other| other != key)
        .map(|&other| (other, key_distance(key, other)))
        .filter(|&(_, distance)| distance <= max_distance)
        .collect();

    near.sort_by(|x, y| x.1.total_cmp(&y.1).then(x.0.cmp(&y.0)));
    near.into_iter().map(|(c, _)| c).collect()
}

/// Similarity from physical key proximity.
///
/// `1 - Σ distance / (columns × WORST_KEY_DISTANCE)`, where a gap costs the
/// worst-case distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardDistanceScorer;

impl KeyboardDistanceScorer {
    /// Scores columns already produced by [`align`].
    pub fn similarity_aligned(&self, columns: &[Column]) -> f64 {
        if columns.is_empty() {
            return 1.0;
        }

        let total: f64 = columns
            .iter()
            .map(|column| match *column {
                Column::Pair(x, y) => key_distance(x, y),
                Column::Gap => WORST_KEY_DISTANCE,
            })
            .sum();

        (1.0 - total / (columns.len() as f64 * WORST_KEY_DISTANCE)).clamp(0.0, 1.0)
    }
}

impl Similarity for KeyboardDistanceScorer {
    fn similarity_chars(&self, a: &[char], b: &[char]) -> f64 {
        self.similarity_aligned(&align(a, b))
    }
}
