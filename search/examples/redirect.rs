//! Matches a few mistyped hosts against a small vocabulary.
//!
//! Usage: `cargo run --example redirect -- [config.toml] [input...]`

use domfuzz_search::{MatchEngine, MatcherConfig};
use std::path::Path;

const VOCABULARY: [&str; 6] = [
    "google.com",
    "github.com",
    "gmail.com",
    "wikipedia.org",
    "mail",
    "admin",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1).peekable();

    let config = match args.next_if(|arg| arg.ends_with(".toml")) {
        Some(path) => MatcherConfig::load(Path::new(&path))?,
        None => MatcherConfig::default(),
    };

    let engine = MatchEngine::new(config)?;
    engine.add_domains(VOCABULARY);

    let inputs: Vec<String> = args.collect();
    let inputs = if inputs.is_empty() {
        ["gogle.com", "githb.com", "wikipeda.org", "amdin", "nothing-like-it"]
            .map(String::from)
            .to_vec()
    } else {
        inputs
    };

    for input in &inputs {
        let report = engine.analyze_input(input);
        match &report.best_match {
            Some(best) => println!(
                "{input:<20} -> {:<15} score={:.3} confidence={} redirect={} errors={:?}",
                best.domain,
                best.score,
                best.confidence,
                report.should_redirect,
                report.analysis_details.possible_errors,
            ),
            None => println!("{input:<20} -> no match"),
        }
    }

    let stats = engine.get_statistics();
    println!(
        "{} queries, {} cache hits, avg {:?}",
        stats.total_queries, stats.cache_hits, stats.average_response_time
    );

    Ok(())
}
