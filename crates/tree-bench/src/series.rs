//! Base `(key, value)` series that benchmark workloads are replicated from.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{BenchError, Result};
use crate::rng::SeededRng;

pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Ascending sequence of `(key, value)` pairs with unique keys, one per
/// source time bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseSeries {
    items: Vec<(i64, f64)>,
}

impl BaseSeries {
    /// Sorts `items` by key. Empty input and repeated keys are rejected.
    pub fn new(mut items: Vec<(i64, f64)>) -> Result<Self> {
        if items.is_empty() {
            return Err(BenchError::EmptySeries);
        }
        items.sort_by_key(|&(k, _)| k);
        if let Some(w) = items.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(BenchError::DuplicateKey(w[0].0));
        }
        Ok(Self { items })
    }

    /// Parses a JSON array of `[key, value]` pairs.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<(i64, f64)> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| BenchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let series = Self::from_json(&json)?;
        debug!("loaded {} base items from {}", series.len(), path.display());
        Ok(series)
    }

    /// Synthetic monthly series: one entry per month starting January of
    /// `start_year`, keyed by the Unix timestamp (seconds) of the first day
    /// of the month, valued with a seeded pseudo-random count.
    pub fn monthly(start_year: i32, months: usize, seed: u64) -> Result<Self> {
        if months == 0 {
            return Err(BenchError::ZeroMonths);
        }
        let mut rng = SeededRng::new(seed);
        let items = (0..months)
            .map(|i| {
                let year = i64::from(start_year) + (i / 12) as i64;
                let month = (i % 12) as u32 + 1;
                let key = days_from_civil(year, month, 1) * SECONDS_PER_DAY;
                (key, rng.random_int(0, 5_000) as f64)
            })
            .collect();
        Self::new(items)
    }

    pub fn items(&self) -> &[(i64, f64)] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn min_key(&self) -> i64 {
        self.items[0].0
    }

    pub fn max_key(&self) -> i64 {
        self.items[self.items.len() - 1].0
    }

    /// Distance between the largest and smallest key, if it fits in `i64`.
    pub fn span(&self) -> Option<i64> {
        self.max_key().checked_sub(self.min_key())
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
pub(crate) fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let (m, d) = (i64::from(month), i64::from(day));
    let y = if m <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}
