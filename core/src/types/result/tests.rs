use super::*;
use serde_json::json;

fn domain(s: &str) -> Domain {
    Domain::try_new(s.to_string()).unwrap()
}

fn sample_match() -> MatchResult {
    MatchResult {
        domain: domain("web"),
        score: 0.75,
        confidence: Confidence::Medium,
        details: ScoreDetails {
            edit_distance: 0.5,
            keyboard_distance: 1.0,
            phonetic_similarity: 0.75,
        },
    }
}

mod confidence {
    use super::*;

    #[test]
    fn test_ordering_weakest_first() {
        assert!(Confidence::None < Confidence::Low);
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for confidence in [
            Confidence::None,
            Confidence::Low,
            Confidence::Medium,
            Confidence::High,
        ] {
            let json = serde_json::to_value(confidence).unwrap();
            assert_eq!(json, json!(confidence.to_string()));
        }
    }
}

mod match_result {
    use super::*;

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample_match()).unwrap();

        assert_eq!(
            json,
            json!({
                "domain": "web",
                "score": 0.75,
                "confidence": "medium",
                "details": {
                    "edit_distance": 0.5,
                    "keyboard_distance": 1.0,
                    "phonetic_similarity": 0.75,
                },
            })
        );
    }

    #[test]
    fn test_deserialized_domain_is_normalized() {
        let mut json = serde_json::to_value(sample_match()).unwrap();
        json["domain"] = json!("HTTPS://WWW.Web");

        let parsed: MatchResult = serde_json::from_value(json).unwrap();

        assert_eq!(parsed.domain, domain("web"));
    }

    #[test]
    fn test_deserialize_rejects_empty_domain() {
        let mut json = serde_json::to_value(sample_match()).unwrap();
        json["domain"] = json!("***");

        assert!(serde_json::from_value::<MatchResult>(json).is_err());
    }
}

mod analysis_report {
    use super::*;

    fn sample_report() -> AnalysisReport {
        let best = sample_match();
        AnalysisReport {
            original_input: "Wen".to_string(),
            normalized_input: "wen".to_string(),
            matches: vec![best.clone()],
            best_match: Some(best),
            should_redirect: false,
            redirect_target: None,
            analysis_details: AnalysisDetails {
                input_length: 3,
                possible_errors: BTreeSet::from([ErrorKind::Substitution]),
                error_positions: vec![2],
                keyboard_slips: vec![2],
                phonetic_slips: vec![],
                vowel_positions: vec![1],
                consonant_positions: vec![0, 2],
                phoneme_distribution: BTreeMap::from([
                    (PhonemeClass::Nasal, 1),
                    (PhonemeClass::Glide, 1),
                    (PhonemeClass::Vowel, 1),
                ]),
                potential_confusions: vec![Confusion {
                    position: 2,
                    original: 'n',
                    similar: vec!['m'],
                }],
            },
        }
    }

    #[test]
    fn test_enum_keys_serialize_lowercase() {
        let json = serde_json::to_value(sample_report()).unwrap();
        let details = &json["analysis_details"];

        assert_eq!(details["possible_errors"], json!(["substitution"]));
        assert_eq!(
            details["phoneme_distribution"],
            json!({ "nasal": 1, "glide": 1, "vowel": 1 })
        );
        assert_eq!(details["potential_confusions"][0]["original"], "n");
        assert_eq!(json["redirect_target"], json!(null));
    }

    #[test]
    fn test_survives_json() {
        let report = sample_report();

        let text = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, report);
    }
}
