//! Realistic misspellings of a word, for exercising a vocabulary.

use crate::scorer::adjacent_keys;
use std::collections::BTreeSet;

/// Keys this close count as neighbours when generating slips.
const NEIGHBOUR_DISTANCE: f64 = 1.5;

/// Distinct single-slip variants of `word`, sorted, at most `max` of them.
///
/// Covers dropped characters, a neighbouring key pressed before a character,
/// a neighbouring key pressed instead of one, and swapped adjacent
/// characters. The word is lowercased first; neither it nor the empty string
/// is ever included.
pub fn typo_variants(word: &str, max: usize) -> Vec<String> {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    let mut variants = BTreeSet::new();

    for i in 0..chars.len() {
        if chars.len() > 1 {
            let mut dropped = chars.clone();
            dropped.remove(i);
            variants.insert(dropped.into_iter().collect::<String>());
        }

        for neighbour in adjacent_keys(chars[i], NEIGHBOUR_DISTANCE) {
            let mut inserted = chars.clone();
            inserted.insert(i, neighbour);
            variants.insert(inserted.into_iter().collect());

            let mut substituted = chars.clone();
            substituted[i] = neighbour;
            variants.insert(substituted.into_iter().collect());
        }

        if i + 1 < chars.len() {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            variants.insert(swapped.into_iter().collect());
        }
    }

    variants.remove(&word);
    variants.into_iter().take(max).collect()
}
