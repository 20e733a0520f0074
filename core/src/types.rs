pub(crate) mod config;
pub use config::{ConfigFileError, MatcherConfig, Thresholds, WEIGHT_SUM_TOLERANCE, Weights};

pub(crate) mod domain;
pub use domain::{Domain, DomainError, MAX_DOMAIN_LENGTH, normalize_input, subdomain_label};

pub(crate) mod result;
pub use result::{
    AnalysisDetails, AnalysisReport, Confidence, Confusion, ErrorKind, MatchResult, PhonemeClass,
    ScoreDetails,
};

pub(crate) mod stats;
pub use stats::Statistics;
