use std::path::PathBuf;

use thiserror::Error;

/// Failures while preparing a benchmark run.
///
/// All of them are raised before any tree is built; a run either returns a
/// complete [`BenchResult`](crate::BenchResult) or one of these.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("base series is empty")]
    EmptySeries,
    #[error("duplicate key {0} in base series")]
    DuplicateKey(i64),
    #[error("replication multiplier must be at least 1")]
    ZeroMultiplier,
    #[error("synthetic series needs at least one month")]
    ZeroMonths,
    #[error("base series key span overflows i64")]
    SpanOverflow,
    #[error("replica keys overflow i64 (multiplier {multiplier}, stride {stride})")]
    KeyOverflow { multiplier: u32, stride: i64 },
    #[error("unknown insertion order `{0}` (expected ascending, descending or shuffled)")]
    InvalidOrder(String),
    #[error("unknown query mode `{0}` (expected count or collect)")]
    InvalidMode(String),
    #[error("invalid period bound `{0}` (expected an integer key, YYYY-MM or YYYY-MM-DD)")]
    InvalidBound(String),
    #[error("{items} items exceed the {max} nodes a tree can address")]
    TooManyItems { items: u128, max: usize },
    #[error("{0}")]
    Usage(String),
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed series JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = BenchError> = std::result::Result<T, E>;
