use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),
}

/// Rejected matcher configuration.
///
/// Raised when an engine is constructed, never deferred to the first query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("similarity weights must sum to 1.0 (±{tolerance}), got {sum}")]
    WeightSum { sum: f64, tolerance: f64 },

    #[error("weight `{name}` must be a non-negative number, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },

    #[error("weight `{name}` must be finite, got {value}")]
    NonFiniteWeight { name: &'static str, value: f64 },

    #[error("threshold `{name}` must be within [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("thresholds must satisfy match <= medium <= high, got {matching} / {medium} / {high}")]
    ThresholdOrder { matching: f64, medium: f64, high: f64 },

    #[error("cache_size must be at least 1")]
    ZeroCacheSize,

    #[error("max_results must be at least 1")]
    ZeroMaxResults,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("domain not found: {0}")]
    NotFound(String),

    #[error("invalid domain entry: {0:?}")]
    InvalidEntry(String),
}
