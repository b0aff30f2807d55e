//! Benchmark run configuration.
//!
//! Read from a TOML file, every field optional:
//!
//! ```toml
//! multiplier = 100
//! order = "shuffled"
//! query_count = 500
//! seed = 42
//! query_mode = "count"
//! # JSON array of [key, value] pairs; omit to use the synthetic monthly series
//! series = "monthly.json"
//! start_year = 2018
//! months = 90
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};
use crate::order::{InsertionOrder, QueryMode};
use crate::series::BaseSeries;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Number of replicas of the base series.
    pub multiplier: u32,
    pub order: InsertionOrder,
    pub query_count: usize,
    /// Seeds both the shuffle and the range draws.
    pub seed: u64,
    pub query_mode: QueryMode,
    /// Base series file. `None` selects the synthetic monthly series.
    pub series: Option<PathBuf>,
    pub start_year: i32,
    pub months: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            multiplier: 100,
            order: InsertionOrder::Ascending,
            query_count: 500,
            seed: 42,
            query_mode: QueryMode::Count,
            series: None,
            start_year: 2018,
            months: 90,
        }
    }
}

impl BenchConfig {
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Reads a TOML config. A relative `series` path is resolved against the
    /// config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| BenchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        // Joining an absolute path replaces the base.
        let dir = path.parent().unwrap_or(Path::new(""));
        config.series = config.series.map(|series| dir.join(series));
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.multiplier == 0 {
            return Err(BenchError::ZeroMultiplier);
        }
        if self.series.is_none() && self.months == 0 {
            return Err(BenchError::ZeroMonths);
        }
        Ok(())
    }

    /// Base series this run replicates.
    pub fn base_series(&self) -> Result<BaseSeries> {
        match &self.series {
            Some(path) => BaseSeries::load(path),
            None => BaseSeries::monthly(self.start_year, self.months, self.seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            BenchConfig::from_toml_str("").unwrap(),
            BenchConfig::default()
        );
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let config = BenchConfig::from_toml_str(
            r#"
            multiplier = 10
            order = "shuffled"
            query_mode = "collect"
            "#,
        )
        .unwrap();
        assert_eq!(config.multiplier, 10);
        assert_eq!(config.order, InsertionOrder::Shuffled);
        assert_eq!(config.query_mode, QueryMode::Collect);
        assert_eq!(config.query_count, 500);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn unknown_fields_and_values_are_rejected() {
        assert!(matches!(
            BenchConfig::from_toml_str("multiplyer = 3"),
            Err(BenchError::Config(_))
        ));
        assert!(matches!(
            BenchConfig::from_toml_str("order = \"sideways\""),
            Err(BenchError::Config(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_multiplier() {
        let config = BenchConfig {
            multiplier: 0,
            ..BenchConfig::default()
        };
        assert!(matches!(config.validate(), Err(BenchError::ZeroMultiplier)));
        assert!(BenchConfig::default().validate().is_ok());
    }

    #[test]
    fn synthetic_series_by_default() {
        let config = BenchConfig {
            months: 12,
            ..BenchConfig::default()
        };
        assert_eq!(config.base_series().unwrap().len(), 12);
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = BenchConfig::load(Path::new("/nonexistent/tree-bench.toml")).unwrap_err();
        assert!(matches!(err, BenchError::Io { .. }));
        assert!(err
            .to_string()
            .starts_with("could not read /nonexistent/tree-bench.toml"));
    }
}
