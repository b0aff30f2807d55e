use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Order in which benchmark items are fed to both trees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionOrder {
    /// Sorted by key. Worst case for the BST: a right-leaning chain.
    #[default]
    Ascending,
    /// Reverse-sorted. The mirror worst case: a left-leaning chain.
    Descending,
    /// Seeded pseudo-random permutation. Expected case.
    Shuffled,
}

impl InsertionOrder {
    pub const ALL: [InsertionOrder; 3] = [Self::Ascending, Self::Descending, Self::Shuffled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Shuffled => "shuffled",
        }
    }
}

impl fmt::Display for InsertionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsertionOrder {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascending" | "asc" | "sorted" => Ok(Self::Ascending),
            "descending" | "desc" | "reverse" => Ok(Self::Descending),
            "shuffled" | "shuffle" | "random" => Ok(Self::Shuffled),
            _ => Err(BenchError::InvalidOrder(s.to_string())),
        }
    }
}

/// Which range-query form the query phase runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// `range_count`: walks the range without allocating.
    #[default]
    Count,
    /// `range_items`: materializes every `(key, value)` pair.
    Collect,
}

impl QueryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Collect => "collect",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryMode {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "count" => Ok(Self::Count),
            "collect" | "items" => Ok(Self::Collect),
            _ => Err(BenchError::InvalidMode(s.to_string())),
        }
    }
}
