//! Typing-error diagnostics for an input against its best match.

use crate::scorer::alignment::{EditStep, edit_trace};
use crate::scorer::{confusion_weight, key_distance, phoneme_class, similar_chars};
use domfuzz_core::types::{AnalysisDetails, Confusion, ErrorKind, PhonemeClass};

/// Keys at most this far apart count as a slip of the finger.
pub const KEYBOARD_SLIP_DISTANCE: f64 = 1.5;
/// Substitutions weighing at least this much count as a sound-alike slip.
pub const PHONETIC_SLIP_WEIGHT: f64 = 0.6;
/// Sound-alike letters listed per position.
const MAX_CONFUSIONS: usize = 3;

/// Phonetic shape of `input` alone: vowel and consonant positions, letters
/// per phoneme class, and the letters each position could be misheard as.
pub fn profile(input: &[char]) -> AnalysisDetails {
    let mut details = AnalysisDetails {
        input_length: input.len(),
        ..Default::default()
    };

    for (position, &c) in input.iter().enumerate() {
        let class = phoneme_class(c);
        match class {
            Some(PhonemeClass::Vowel) => details.vowel_positions.push(position),
            _ if c.is_ascii_alphabetic() => details.consonant_positions.push(position),
            _ => {}
        }
        if let Some(class) = class {
            *details.phoneme_distribution.entry(class).or_default() += 1;
        }

        let mut similar = similar_chars(c, PHONETIC_SLIP_WEIGHT);
        if !similar.is_empty() {
            similar.truncate(MAX_CONFUSIONS);
            details.potential_confusions.push(Confusion {
                position,
                original: c,
                similar,
            });
        }
    }

    details
}

/// Classifies every divergence of `input` from `target`.
///
/// Two adjacent substitutions that swap characters are reported as one
/// transposition at the first index. Positions index into `input`; a
/// deletion is reported at the index where the character is missing.
/// Includes the [`profile`] of `input`.
pub fn diagnose(input: &[char], target: &[char]) -> AnalysisDetails {
    let steps = edit_trace(input, target);
    let mut details = profile(input);

    let mut k = 0;
    while k < steps.len() {
        let (kind, position) = match steps[k] {
            EditStep::Match { .. } => {
                k += 1;
                continue;
            }
            EditStep::Substitute { input: i, target: j } => {
                if is_swap(input, target, i, j, steps.get(k + 1)) {
                    k += 1;
                    (ErrorKind::Transposition, i)
                } else {
                    if key_distance(input[i], target[j]) <= KEYBOARD_SLIP_DISTANCE {
                        details.keyboard_slips.push(i);
                    }
                    if confusion_weight(input[i], target[j]) >= PHONETIC_SLIP_WEIGHT {
                        details.phonetic_slips.push(i);
                    }
                    (ErrorKind::Substitution, i)
                }
            }
            EditStep::Extra { input: i } => (ErrorKind::Insertion, i),
            EditStep::Missing { input: i, .. } => (ErrorKind::Deletion, i),
        };

        details.possible_errors.insert(kind);
        if details.error_positions.last() != Some(&position) {
            details.error_positions.push(position);
        }
        k += 1;
    }

    details
}

fn is_swap(input: &[char], target: &[char], i: usize, j: usize, next: Option<&EditStep>) -> bool {
    match next {
        Some(&EditStep::Substitute {
            input: i2,
            target: j2,
        }) => i2 == i + 1 && j2 == j + 1 && input[i] == target[j2] && input[i2] == target[j],
        _ => false,
    }
}
