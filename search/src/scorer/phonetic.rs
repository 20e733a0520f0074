use super::Similarity;
use super::alignment::{Column, align};
use domfuzz_core::types::PhonemeClass;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Weight of a commonly confused pair such as `b`/`p`.
pub const CONFUSABLE_WEIGHT: f64 = 0.8;
/// Weight of two distinct sounds from the same phoneme class.
pub const SAME_CLASS_WEIGHT: f64 = 0.4;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

const CONFUSABLE_PAIRS: [(char, char); 14] = [
    ('b', 'p'),
    ('d', 't'),
    ('g', 'k'),
    ('v', 'w'),
    ('f', 'v'),
    ('s', 'z'),
    ('c', 's'),
    ('j', 'g'),
    ('l', 'r'),
    ('m', 'n'),
    ('a', 'e'),
    ('i', 'e'),
    ('o', 'u'),
    ('u', 'v'),
];

const PHONEME_CLASSES: [(PhonemeClass, &str); 6] = [
    (PhonemeClass::Plosive, "pbtdkg"),
    (PhonemeClass::Fricative, "fvszh"),
    (PhonemeClass::Nasal, "mn"),
    (PhonemeClass::Liquid, "lr"),
    (PhonemeClass::Glide, "wy"),
    (PhonemeClass::Vowel, "aeiou"),
];

/// Directional `(from, to) -> weight` entries. Absent pairs weigh 0.
static CONFUSION_TABLE: LazyLock<HashMap<(char, char), f64>> = LazyLock::new(|| {
    let mut table = HashMap::new();

    for (x, y) in CONFUSABLE_PAIRS {
        table.insert((x, y), CONFUSABLE_WEIGHT);
        table.insert((y, x), CONFUSABLE_WEIGHT);
    }

    for (_, class) in PHONEME_CLASSES {
        for x in class.chars() {
            for y in class.chars().filter(|&y| y != x) {
                table.entry((x, y)).or_insert(SAME_CLASS_WEIGHT);
            }
        }
    }

    table
});

/// Confusion weight of `from` read as `to`.
pub fn confusion_weight(from: char, to: char) -> f64 {
    if from == to {
        return 1.0;
    }
    CONFUSION_TABLE
        .get(&(from.to_ascii_lowercase(), to.to_ascii_lowercase()))
        .copied()
        .unwrap_or(0.0)
}

/// Phoneme class of a letter; `None` for letters outside every class,
/// digits, and punctuation.
pub fn phoneme_class(c: char) -> Option<PhonemeClass> {
    let c = c.to_ascii_lowercase();
    PHONEME_CLASSES
        .iter()
        .find(|(_, members)| members.contains(c))
        .map(|&(class, _)| class)
}

/// Whether every table entry has an equal-weight reverse entry.
pub fn confusion_table_is_symmetric() -> bool {
    CONFUSION_TABLE
        .iter()
        .all(|(&(x, y), &weight)| CONFUSION_TABLE.get(&(y, x)) == Some(&weight))
}

/// Characters confusable with `c` at `min_weight` or more, strongest first.
pub fn similar_chars(c: char, min_weight: f64) -> Vec<char> {
    let c = c.to_ascii_lowercase();
    let mut similar: Vec<(char, f64)> = ALPHABET
        .chars()
        .filter(|&other| other != c)
        .map(|other| (other, confusion_weight(c, other)))
        .filter(|&(_, weight)| weight > 0.0 && weight >= min_weight)
        .collect();

    similar.sort_by(|x, y| y.1.total_cmp(&x.1).then(x.0.cmp(&y.0)));
    similar.into_iter().map(|(c, _)| c).collect()
}

/// Similarity from sound-alike characters, averaged over aligned columns.
///
/// Gaps contribute 0. Lookups go from the first string's character to the
/// second's.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneticSimilarityScorer;

impl PhoneticSimilarityScorer {
    /// Scores columns already produced by [`align`].
    pub fn similarity_aligned(&self, columns: &[Column]) -> f64 {
        if columns.is_empty() {
            return 1.0;
        }

        let total: f64 = columns
            .iter()
            .map(|column| match *column {
                Column::Pair(x, y) => confusion_weight(x, y),
                Column::Gap => 0.0,
            })
            .sum();

        total / columns.len() as f64
    }
}

impl Similarity for PhoneticSimilarityScorer {
    fn similarity_chars(&self, a: &[char], b: &[char]) -> f64 {
        self.similarity_aligned(&align(a, b))
    }
}
