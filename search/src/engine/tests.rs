use super::*;
use common::{VOCABULARY, assert_close, engine_with, make_domain};
use domfuzz_core::types::{Confidence, ErrorKind, Weights};

mod common {
    use super::*;

    pub(super) const VOCABULARY: [&str; 5] = ["web", "api", "chat", "admin", "mail"];

    pub(super) fn make_domain(s: &str) -> Domain {
        Domain::try_new(s.to_string()).unwrap()
    }

    pub(super) fn engine_with(domains: &[&str]) -> MatchEngine {
        let engine = MatchEngine::new(MatcherConfig::default()).unwrap();
        engine.add_domains(domains);
        engine
    }

    pub(super) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }
}

mod new {
    use super::*;
    use domfuzz_core::error::ConfigError;

    #[test]
    fn test_default_config_is_accepted() {
        let engine = MatchEngine::new(MatcherConfig::default()).unwrap();

        assert!(engine.domains().is_empty());
        assert_eq!(engine.config(), &MatcherConfig::default());
    }

    #[test]
    fn test_bad_weights_are_rejected() {
        let config = MatcherConfig {
            weights: Weights {
                edit: 0.9,
                ..Weights::default()
            },
            ..MatcherConfig::default()
        };

        let result = MatchEngine::new(config);

        assert!(matches!(result, Err(ConfigError::WeightSum { .. })));
    }

    #[test]
    fn test_infinite_length_penalty_is_rejected() {
        let config = MatcherConfig {
            weights: Weights {
                length_penalty: f64::INFINITY,
                ..Weights::default()
            },
            ..MatcherConfig::default()
        };

        assert!(matches!(
            MatchEngine::new(config),
            Err(ConfigError::NonFiniteWeight {
                name: "length_penalty",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_cache_size_is_rejected() {
        let config = MatcherConfig {
            cache_size: 0,
            ..MatcherConfig::default()
        };

        assert!(matches!(
            MatchEngine::new(config),
            Err(ConfigError::ZeroCacheSize)
        ));
    }
}

mod add_domains {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let engine = engine_with(&VOCABULARY);

        let added = engine.add_domains(VOCABULARY);

        assert_eq!(added, 0);
        assert_eq!(engine.domains().len(), VOCABULARY.len());
    }

    #[test]
    fn test_entries_are_normalized() {
        let engine = engine_with(&["https://www.Example.COM", "example.com"]);

        assert_eq!(engine.domains(), vec![make_domain("example.com")]);
    }

    #[test]
    fn test_add_invalidates_cache() {
        let engine = engine_with(&VOCABULARY);
        let before = engine.find_matches("wen", 5);
        assert_eq!(before[0].domain, make_domain("web"));

        engine.add_domains(["wen"]);
        let after = engine.find_matches("wen", 5);

        assert_eq!(after[0].domain, make_domain("wen"));
        assert_eq!(after[0].score, 1.0);
        assert_eq!(engine.get_statistics().cache_misses, 2);
    }
}

mod remove_domain {
    use super::*;
    use domfuzz_core::error::VocabularyError;

    #[test]
    fn test_removed_domain_stops_matching() {
        let engine = engine_with(&VOCABULARY);
        assert_eq!(engine.get_best_match("wen").unwrap().domain, make_domain("web"));

        let removed = engine.remove_domain("WEB").unwrap();

        assert_eq!(removed, make_domain("web"));
        assert!(
            engine
                .find_matches("wen", 10)
                .iter()
                .all(|m| m.domain != removed)
        );
    }

    #[test]
    fn test_remove_missing_domain() {
        let engine = engine_with(&VOCABULARY);

        assert!(matches!(
            engine.remove_domain("nope"),
            Err(VocabularyError::NotFound(_))
        ));
    }

    #[test]
    fn test_clear_domains() {
        let engine = engine_with(&VOCABULARY);
        engine.find_matches("wen", 3);

        engine.clear_domains();

        assert!(engine.domains().is_empty());
        assert!(engine.find_matches("wen", 3).is_empty());
    }
}

mod find_matches {
    use super::*;

    #[test]
    fn test_adjacent_key_typo() {
        let engine = engine_with(&VOCABULARY);

        let matches = engine.find_matches("wen", 3);

        assert_eq!(matches[0].domain, make_domain("web"));
        assert!(matches[0].score > 0.6);
        assert!(matches[0].confidence >= Confidence::Low);
        assert_eq!(matches[0].confidence, Confidence::Medium);
    }

    #[test]
    fn test_missing_letter_in_dotted_domain() {
        let engine = engine_with(&["google.com"]);

        let matches = engine.find_matches("gogle.com", 10);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].domain, make_domain("google.com"));
        assert_close(matches[0].details.edit_distance, 1.0 - 1.0 / 10.0, 1e-12);
        assert_close(matches[0].score, 0.89, 1e-9);
        assert_eq!(matches[0].confidence, Confidence::High);
    }

    #[test]
    fn test_exact_match_scores_one() {
        let engine = engine_with(&VOCABULARY);

        let best = engine.get_best_match("  HTTPS://Mail ").unwrap();

        assert_eq!(best.domain, make_domain("mail"));
        assert_eq!(best.score, 1.0);
        assert_eq!(best.confidence, Confidence::High);
    }

    #[test]
    fn test_top_k_larger_than_qualifying() {
        let engine = engine_with(&VOCABULARY);

        let all = engine.find_matches("wen", usize::MAX);
        let many = engine.find_matches("wen", 100);

        assert!(all.len() < VOCABULARY.len());
        assert_eq!(many, all);
    }

    #[test]
    fn test_top_k_zero() {
        let engine = engine_with(&VOCABULARY);

        assert!(engine.find_matches("wen", 0).is_empty());
    }

    #[test]
    fn test_results_are_ranked_and_qualified() {
        let engine = engine_with(&["mail", "mall", "main", "maid", "web"]);

        let matches = engine.find_matches("mai", 10);

        let tied: Vec<&str> = matches[..3].iter().map(|m| m.domain.as_str()).collect();
        assert_eq!(tied, ["maid", "mail", "main"]);
        assert_eq!(matches[0].score, matches[1].score);
        assert_eq!(matches[1].score, matches[2].score);
        for pair in matches.windows(2) {
            assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].domain < pair[1].domain)
            );
        }
        assert!(matches.iter().all(|m| m.score >= 0.6));
        assert!(matches.iter().all(|m| m.confidence != Confidence::None));
    }

    #[test]
    fn test_score_is_recomputable_from_details() {
        let engine = engine_with(&["web", "webmail", "mail", "admin"]);
        let weights = engine.config().weights;

        for m in engine.find_matches("wbmail", 10) {
            let input_len = "wbmail".len();
            let domain_len = m.domain.as_str().len();
            let penalty = weights.length_penalty * input_len.abs_diff(domain_len) as f64
                / input_len.max(domain_len) as f64;
            let expected = weights.edit * m.details.edit_distance
                + weights.keyboard * m.details.keyboard_distance
                + weights.phonetic * m.details.phonetic_similarity
                - penalty;

            assert_close(m.score, expected.clamp(0.0, 1.0), 1e-12);
        }
    }

    #[test]
    fn test_empty_vocabulary() {
        let engine = MatchEngine::new(MatcherConfig::default()).unwrap();

        assert!(engine.find_matches("web", 5).is_empty());
        assert!(engine.get_best_match("web").is_none());
    }

    #[test]
    fn test_empty_input() {
        let engine = engine_with(&VOCABULARY);

        assert!(engine.find_matches("", 5).is_empty());
        assert!(engine.find_matches("   ", 5).is_empty());
    }

    #[test]
    fn test_overlong_input_matches_nothing() {
        let engine = engine_with(&VOCABULARY);
        let input = "mail".repeat(5_000);

        assert!(engine.find_matches(&input, 5).is_empty());
        assert_eq!(engine.get_statistics().cache_misses, 1);
    }

    #[test]
    fn test_length_bound_never_undercuts_score() {
        let samples = [
            "",
            "a",
            "web",
            "wen",
            "webb",
            "mail",
            "admin",
            "gogle.com",
            "google.com",
        ];

        for variant_enabled in [false, true] {
            let config = MatcherConfig {
                use_enhanced_edit_variant: variant_enabled,
                ..MatcherConfig::default()
            };
            let engine = MatchEngine::new(config).unwrap();
            let variant = engine.edit.variant();

            for input in samples {
                for candidate in samples.iter().filter(|c| !c.is_empty()) {
                    let result = engine.score_pair(input, &make_domain(candidate));
                    let bound = engine.combiner.upper_bound(input.len(), candidate.len(), variant);
                    assert!(
                        result.score <= bound + 1e-9,
                        "{input:?} vs {candidate:?}: {} > {bound}",
                        result.score
                    );
                }
            }
        }
    }

    #[test]
    fn test_typo_variants_find_their_word() {
        let engine = engine_with(&["google.com", "github.com"]);

        let variants = crate::typo_variants("google.com", usize::MAX);
        assert!(!variants.is_empty());

        for variant in variants {
            let best = engine.get_best_match(&variant).unwrap();
            assert_eq!(best.domain, make_domain("google.com"), "{variant}");
        }
    }

    #[test]
    fn test_enhanced_variant() {
        let config = MatcherConfig {
            use_enhanced_edit_variant: true,
            ..MatcherConfig::default()
        };
        let engine = MatchEngine::new(config).unwrap();
        engine.add_domains(VOCABULARY);

        let exact = engine.get_best_match("admin").unwrap();
        let typo = engine.get_best_match("admn").unwrap();

        assert_eq!(exact.score, 1.0);
        assert_eq!(typo.domain, make_domain("admin"));
        assert!(typo.score < 1.0);
    }
}

mod batch {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let engine = engine_with(&VOCABULARY);
        let inputs = ["wen", "mial", "", "admn", "chta"];

        let batch = engine.find_matches_batch(&inputs, 3);

        assert_eq!(batch.len(), inputs.len());
        for (input, results) in inputs.iter().zip(&batch) {
            assert_eq!(results, &engine.find_matches(input, 3));
        }
    }
}

mod redirect {
    use super::*;

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let engine = engine_with(&["google.com"]);
        let score = engine.get_best_match("gogle.com").unwrap().score;

        assert!(engine.should_redirect("gogle.com", Some(score)));
        assert!(!engine.should_redirect("gogle.com", Some(score + 1e-9)));
    }

    #[test]
    fn test_default_threshold() {
        let engine = engine_with(&VOCABULARY);

        assert!(engine.should_redirect("mail", None));
        // "wen" scores in the medium band, under the default redirect threshold.
        assert!(!engine.should_redirect("wen", None));
    }

    #[test]
    fn test_no_match_never_redirects() {
        let engine = engine_with(&VOCABULARY);

        assert!(!engine.should_redirect("zzzzzzzz", Some(0.0)));
        assert!(engine.redirect_target("zzzzzzzz", None).is_none());
    }

    #[test]
    fn test_redirect_target() {
        let engine = engine_with(&["google.com"]);

        assert_eq!(
            engine.redirect_target("gogle.com", None),
            Some(make_domain("google.com"))
        );
    }
}

mod score_pair {
    use super::*;

    #[test]
    fn test_unfiltered_and_uncached() {
        let engine = engine_with(&VOCABULARY);

        let result = engine.score_pair("zzz", &make_domain("web"));

        assert_eq!(result.confidence, Confidence::None);
        assert!(result.score < 0.6);
        assert_eq!(engine.get_statistics().total_queries, 0);
    }

    #[test]
    fn test_matches_ranked_score() {
        let engine = engine_with(&VOCABULARY);

        let ranked = engine.get_best_match("wen").unwrap();
        let direct = engine.score_pair("wen", &make_domain("web"));

        assert_eq!(ranked, direct);
    }
}

mod analyze_input {
    use super::*;

    #[test]
    fn test_deletion_report() {
        let engine = engine_with(&["google.com"]);

        let report = engine.analyze_input("Gogle.com");

        assert_eq!(report.original_input, "Gogle.com");
        assert_eq!(report.normalized_input, "gogle.com");
        assert_eq!(report.best_match.as_ref().unwrap().domain, make_domain("google.com"));
        assert!(report.should_redirect);
        assert_eq!(report.redirect_target, Some(make_domain("google.com")));
        assert_eq!(report.analysis_details.input_length, 9);
        assert_eq!(
            report.analysis_details.possible_errors.iter().collect::<Vec<_>>(),
            vec![&ErrorKind::Deletion]
        );
        assert_eq!(report.analysis_details.error_positions, vec![1]);
    }

    #[test]
    fn test_transposition_report() {
        let engine = engine_with(&["mail.com", "web.com"]);

        let report = engine.analyze_input("mial.com");

        assert_eq!(report.best_match.unwrap().domain, make_domain("mail.com"));
        assert!(
            report
                .analysis_details
                .possible_errors
                .contains(&ErrorKind::Transposition)
        );
        assert_eq!(report.analysis_details.error_positions, vec![1]);
    }

    #[test]
    fn test_insertion_report() {
        let engine = engine_with(&["web"]);

        let report = engine.analyze_input("webb");

        assert!(
            report
                .analysis_details
                .possible_errors
                .contains(&ErrorKind::Insertion)
        );
    }

    #[test]
    fn test_substitution_report() {
        let engine = engine_with(&VOCABULARY);

        let report = engine.analyze_input("wen");

        assert!(!report.should_redirect);
        assert!(report.redirect_target.is_none());
        assert_eq!(report.analysis_details.error_positions, vec![2]);
        assert_eq!(report.analysis_details.keyboard_slips, vec![2]);
    }

    #[test]
    fn test_no_match_report() {
        let engine = engine_with(&VOCABULARY);

        let report = engine.analyze_input("");

        assert!(report.matches.is_empty());
        assert!(report.best_match.is_none());
        assert!(!report.should_redirect);
        assert_eq!(report.analysis_details.input_length, 0);
        assert!(report.analysis_details.possible_errors.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let engine = engine_with(&VOCABULARY);

        let report = engine.analyze_input("wen");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["normalized_input"], "wen");
        assert_eq!(json["best_match"]["domain"], "web");
        assert_eq!(json["best_match"]["confidence"], "medium");
        assert_eq!(json["analysis_details"]["possible_errors"][0], "substitution");
    }
}

mod statistics {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_repeated_query_hits_cache() {
        let engine = engine_with(&VOCABULARY);

        let first = engine.find_matches("wen", 5);
        let second = engine.find_matches("WEN", 5);

        assert_eq!(first, second);
        let stats = engine.get_statistics();
        assert_eq!(stats.cache_misses, 1);
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(stats.total_queries, 2);
        assert_eq!(stats.cached_queries, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_cached_ranking_serves_smaller_top_k() {
        let engine = engine_with(&["mail", "mall", "main", "maid"]);

        let full = engine.find_matches("mai", 10);
        let top = engine.find_matches("mai", 2);

        assert_eq!(top, full[..2]);
        assert_eq!(engine.get_statistics().cache_hits, 1);
    }

    #[test]
    fn test_counts_and_average() {
        let engine = engine_with(&VOCABULARY);
        for input in ["wen", "api", "wen", "chta"] {
            engine.find_matches(input, 3);
        }

        let stats = engine.get_statistics();

        assert_eq!(stats.total_domains, VOCABULARY.len());
        assert_eq!(stats.total_queries, 4);
        assert_eq!(stats.cache_hits + stats.cache_misses, stats.total_queries);
        assert_eq!(stats.cached_queries, 3);
        assert_eq!(
            stats.average_response_time,
            stats.cumulative_response_time / 4
        );
    }

    #[test]
    fn test_fresh_engine_has_zero_average() {
        let engine = engine_with(&VOCABULARY);

        let stats = engine.get_statistics();

        assert_eq!(stats.total_queries, 0);
        assert_eq!(stats.average_response_time, Duration::ZERO);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_reset_and_clear() {
        let engine = engine_with(&VOCABULARY);
        engine.find_matches("wen", 3);
        engine.find_matches("wen", 3);

        engine.reset_statistics();
        engine.clear_cache();
        let stats = engine.get_statistics();

        assert_eq!(stats.total_queries, 0);
        assert_eq!(stats.cache_hits, 0);
        assert_eq!(stats.cached_queries, 0);
        assert_eq!(stats.total_domains, VOCABULARY.len());
    }
}
