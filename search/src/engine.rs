//! Thread-safe matching engine.

use crate::analysis::{diagnose, profile};
use crate::cache::{CachedRanking, ResultCache};
use crate::combiner::ScoreCombiner;
use crate::scorer::alignment::align;
use crate::scorer::{
    EditDistanceScorer, EditVariant, KeyboardDistanceScorer, PhoneticSimilarityScorer, Similarity,
};
use crate::stats::StatsRecorder;
use domfuzz_core::VocabularyStore;
use domfuzz_core::error::{ConfigError, VocabularyError};
use domfuzz_core::types::{
    AnalysisReport, Domain, MatchResult, MatcherConfig, ScoreDetails, Statistics, normalize_input,
};
use parking_lot::RwLock;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

/// Absorbs rounding when comparing the length bound with the match threshold.
const PRUNE_SLACK: f64 = 1e-9;

/// Ranks inputs against a vocabulary of canonical domains.
///
/// All operations take `&self`; share the engine across threads with an
/// [`Arc`]. The vocabulary lock is held only to take a snapshot or to
/// mutate, so scoring never blocks writers.
pub struct MatchEngine {
    config: MatcherConfig,
    edit: EditDistanceScorer,
    keyboard: KeyboardDistanceScorer,
    phonetic: PhoneticSimilarityScorer,
    combiner: ScoreCombiner,
    vocabulary: RwLock<VocabularyStore>,
    cache: ResultCache,
    stats: StatsRecorder,
}

/// Create operations.
impl MatchEngine {
    /// Validates the configuration and builds an engine with an empty vocabulary.
    pub fn new(config: MatcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.cache_capacity()?;

        let variant = if config.use_enhanced_edit_variant {
            EditVariant::JaroWinkler
        } else {
            EditVariant::Levenshtein
        };

        Ok(Self {
            edit: EditDistanceScorer::new(variant),
            keyboard: KeyboardDistanceScorer,
            phonetic: PhoneticSimilarityScorer,
            combiner: ScoreCombiner::new(config.weights, config.thresholds),
            vocabulary: RwLock::new(VocabularyStore::new()),
            cache: ResultCache::new(capacity),
            stats: StatsRecorder::default(),
            config,
        })
    }
}

/// Vocabulary operations.
impl MatchEngine {
    /// Adds canonical domains and returns how many were new.
    ///
    /// Cached rankings are discarded whenever the vocabulary changes.
    pub fn add_domains<I, S>(&self, domains: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = self.vocabulary.write().add(domains);
        if added > 0 {
            self.cache.clear();
        }
        added
    }

    /// Removes one canonical domain.
    pub fn remove_domain(&self, domain: &str) -> Result<Domain, VocabularyError> {
        let removed = self.vocabulary.write().remove(domain)?;
        self.cache.clear();
        Ok(removed)
    }

    pub fn clear_domains(&self) {
        self.vocabulary.write().clear();
        self.cache.clear();
    }

    /// Current vocabulary in insertion order.
    pub fn domains(&self) -> Vec<Domain> {
        self.vocabulary.read().all().to_vec()
    }
}

/// Query operations.
impl MatchEngine {
    /// Top `top_k` candidates at or above the match threshold, best first.
    ///
    /// Ties on score are broken by ascending domain.
    pub fn find_matches(&self, input: &str, top_k: usize) -> Vec<MatchResult> {
        let started = Instant::now();
        let normalized = normalize_input(input);

        let (candidates, generation) = {
            let vocabulary = self.vocabulary.read();
            (vocabulary.snapshot(), vocabulary.generation())
        };

        if let Some(ranking) = self.cache.get_current(&normalized, generation) {
            let elapsed = started.elapsed();
            self.stats.record_hit(elapsed);
            trace!(input = %normalized, ?elapsed, "cache hit");
            return ranking.iter().take(top_k).cloned().collect();
        }

        let input_chars: Vec<char> = normalized.chars().collect();
        let matching = self.config.thresholds.matching;
        let variant = self.edit.variant();
        let mut pruned = 0usize;
        let mut ranking: Vec<MatchResult> = candidates
            .iter()
            .filter(|domain| {
                let reachable = self
                    .combiner
                    .upper_bound(input_chars.len(), domain.chars().count(), variant)
                    + PRUNE_SLACK
                    >= matching;
                pruned += usize::from(!reachable);
                reachable
            })
            .map(|domain| self.score_chars(&input_chars, domain))
            .filter(|result| result.score >= matching)
            .collect();
        ranking.sort_by(rank_order);

        let ranking: Arc<[MatchResult]> = ranking.into();
        self.cache.put(
            normalized.clone(),
            CachedRanking {
                generation,
                results: Arc::clone(&ranking),
            },
        );

        let elapsed = started.elapsed();
        self.stats.record_miss(elapsed);
        debug!(
            input = %normalized,
            candidates = candidates.len(),
            pruned,
            matches = ranking.len(),
            ?elapsed,
            "scored query"
        );

        ranking.iter().take(top_k).cloned().collect()
    }

    /// Runs [`find_matches`](Self::find_matches) for every input in parallel.
    ///
    /// Output order follows input order.
    pub fn find_matches_batch<S>(&self, inputs: &[S], top_k: usize) -> Vec<Vec<MatchResult>>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.find_matches(input.as_ref(), top_k))
            .collect()
    }

    pub fn get_best_match(&self, input: &str) -> Option<MatchResult> {
        self.find_matches(input, 1).into_iter().next()
    }

    /// Whether the best match scores at least `threshold`, which defaults to
    /// the configured redirect threshold.
    pub fn should_redirect(&self, input: &str, threshold: Option<f64>) -> bool {
        self.redirect_target(input, threshold).is_some()
    }

    /// The domain to redirect to, if the best match clears `threshold`.
    pub fn redirect_target(&self, input: &str, threshold: Option<f64>) -> Option<Domain> {
        let threshold = threshold.unwrap_or(self.config.thresholds.redirect);
        self.get_best_match(input)
            .filter(|best| best.score >= threshold)
            .map(|best| best.domain)
    }

    /// Scores one pair, bypassing the vocabulary, the cache, and the match threshold.
    pub fn score_pair(&self, input: &str, candidate: &Domain) -> MatchResult {
        let input_chars: Vec<char> = normalize_input(input).chars().collect();
        self.score_chars(&input_chars, candidate)
    }

    /// Matches `input` and explains how it diverges from the best match.
    pub fn analyze_input(&self, input: &str) -> AnalysisReport {
        let normalized = normalize_input(input);
        let matches = self.find_matches(input, self.config.max_results);
        let best_match = matches.first().cloned();

        let input_chars: Vec<char> = normalized.chars().collect();
        let analysis_details = match &best_match {
            Some(best) => {
                let target: Vec<char> = best.domain.as_str().chars().collect();
                diagnose(&input_chars, &target)
            }
            None => profile(&input_chars),
        };

        let redirect_target = best_match
            .as_ref()
            .filter(|best| best.score >= self.config.thresholds.redirect)
            .map(|best| best.domain.clone());

        AnalysisReport {
            original_input: input.to_string(),
            normalized_input: normalized,
            should_redirect: redirect_target.is_some(),
            redirect_target,
            best_match,
            matches,
            analysis_details,
        }
    }

    fn score_chars(&self, input: &[char], domain: &Domain) -> MatchResult {
        let candidate: Vec<char> = domain.as_str().chars().collect();
        let columns = align(input, &candidate);
        let details = ScoreDetails {
            edit_distance: self.edit.similarity_chars(input, &candidate),
            keyboard_distance: self.keyboard.similarity_aligned(&columns),
            phonetic_similarity: self.phonetic.similarity_aligned(&columns),
        };
        let (score, confidence) = self.combiner.combine(&details, input.len(), candidate.len());

        MatchResult {
            domain: domain.clone(),
            score,
            confidence,
            details,
        }
    }
}

/// Maintenance operations.
impl MatchEngine {
    pub fn get_statistics(&self) -> Statistics {
        let total_domains = self.vocabulary.read().len();
        self.stats.snapshot(total_domains, self.cache.len())
    }

    pub fn reset_statistics(&self) {
        self.stats.reset();
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }
}

fn rank_order(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.domain.cmp(&b.domain))
}

#[cfg(test)]
mod tests;
