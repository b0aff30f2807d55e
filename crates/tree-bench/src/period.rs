//! Period lookups over a base series.
//!
//! The series is loaded into a red-black tree once, then every period
//! `[lo, hi]` is answered with a single range walk: the entry count, the sum
//! and mean of their values, and the first and last key hit.
//!
//! Period bounds are integer keys. On the command line they may also be
//! written as `YYYY-MM` or `YYYY-MM-DD`, which resolve to the Unix timestamp
//! (seconds) of that day, matching the keys of the synthetic monthly series.
//! A series keyed by plain years is queried with plain years.

use std::fmt;

use log::debug;
use range_forest::{OrderedMap, RbMap};
use serde::Serialize;

use crate::error::{BenchError, Result};
use crate::series::{days_from_civil, BaseSeries, SECONDS_PER_DAY};

/// Aggregate of the entries whose keys fall in `[lo, hi]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub lo: i64,
    pub hi: i64,
    pub count: usize,
    pub total: f64,
    /// `None` when the period holds no entries.
    pub mean: Option<f64>,
    pub first: Option<i64>,
    pub last: Option<i64>,
}

/// Red-black tree over the series, ready for repeated period lookups.
pub fn period_tree(base: &BaseSeries) -> RbMap<i64, f64> {
    base.items().iter().copied().collect()
}

/// Summarizes the entries of `map` with `lo <= key <= hi`. An empty or
/// inverted period yields a zero count and no mean.
pub fn summarize<M>(map: &M, lo: i64, hi: i64) -> PeriodSummary
where
    M: OrderedMap<i64, f64>,
{
    let mut summary = PeriodSummary {
        lo,
        hi,
        count: 0,
        total: 0.0,
        mean: None,
        first: None,
        last: None,
    };
    for (&k, &v) in map.range(&lo, &hi) {
        if summary.first.is_none() {
            summary.first = Some(k);
        }
        summary.last = Some(k);
        summary.count += 1;
        summary.total += v;
    }
    if summary.count > 0 {
        summary.mean = Some(summary.total / summary.count as f64);
    }
    summary
}

/// Looks up one period of `base`. Missing bounds default to the series'
/// smallest and largest key.
pub fn query_period(base: &BaseSeries, from: Option<i64>, to: Option<i64>) -> PeriodSummary {
    let tree = period_tree(base);
    let lo = from.unwrap_or_else(|| base.min_key());
    let hi = to.unwrap_or_else(|| base.max_key());
    let summary = summarize(&tree, lo, hi);
    debug!(
        "period [{lo}, {hi}] over {} entries (tree height {}): {} hits",
        tree.len(),
        tree.height(),
        summary.count
    );
    summary
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Parses a period bound: an integer key, `YYYY-MM` (first day of the
/// month) or `YYYY-MM-DD`.
pub fn parse_bound(s: &str) -> Result<i64> {
    let invalid = || BenchError::InvalidBound(s.to_string());
    if let Ok(key) = s.parse::<i64>() {
        return Ok(key);
    }

    let mut parts = s.splitn(3, '-');
    let year: i64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let month: u32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let day: u32 = match parts.next() {
        Some(p) => p.parse().map_err(|_| invalid())?,
        None => 1,
    };
    if !(1..=9999).contains(&year)
        || !(1..=12).contains(&month)
        || day == 0
        || day > days_in_month(year, month)
    {
        return Err(invalid());
    }
    Ok(days_from_civil(year, month, day) * SECONDS_PER_DAY)
}

impl PeriodSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for PeriodSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "period: {} ..= {}", self.lo, self.hi)?;
        let Some(mean) = self.mean else {
            return writeln!(f, "no entries in period");
        };
        writeln!(f, "entries: {}", self.count)?;
        writeln!(f, "total:   {:.1}", self.total)?;
        writeln!(f, "mean:    {mean:.1}")?;
        if let (Some(first), Some(last)) = (self.first, self.last) {
            writeln!(f, "keys:    {first} ..= {last}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yearly() -> BaseSeries {
        let items = vec![(2019, 10.0), (2020, 20.0), (2021, 30.0), (2022, 60.0)];
        BaseSeries::new(items).unwrap()
    }

    #[test]
    fn summarizes_inner_period() {
        let tree = period_tree(&yearly());
        let summary = summarize(&tree, 2020, 2021);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, 50.0);
        assert_eq!(summary.mean, Some(25.0));
        assert_eq!((summary.first, summary.last), (Some(2020), Some(2021)));
    }

    #[test]
    fn empty_and_inverted_periods() {
        let tree = period_tree(&yearly());
        for (lo, hi) in [(1990, 2000), (2023, 2030), (2021, 2020)] {
            let summary = summarize(&tree, lo, hi);
            assert_eq!(summary.count, 0, "[{lo}, {hi}]");
            assert_eq!(summary.total, 0.0);
            assert_eq!(summary.mean, None);
            assert_eq!(summary.first, None);
        }
    }

    #[test]
    fn open_bounds_cover_the_series() {
        let summary = query_period(&yearly(), None, None);
        assert_eq!((summary.lo, summary.hi), (2019, 2022));
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, Some(30.0));

        let summary = query_period(&yearly(), Some(2021), None);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, 90.0);
    }

    #[test]
    fn bounds_parse_as_keys_or_dates() {
        assert_eq!(parse_bound("2019").unwrap(), 2019);
        assert_eq!(parse_bound("-5").unwrap(), -5);
        assert_eq!(parse_bound("2018-01").unwrap(), 1_514_764_800);
        assert_eq!(parse_bound("2019-02-01").unwrap(), 1_548_979_200);
        assert_eq!(parse_bound("2020-02-29").unwrap(), 1_582_934_400);
        for bad in [
            "",
            "2019-13",
            "2019-00",
            "2019-02-29",
            "2019-04-31",
            "2019-1x",
            "0-01",
            "123456789-01",
            "march",
        ] {
            assert!(
                matches!(parse_bound(bad), Err(BenchError::InvalidBound(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn display_reports_empty_period() {
        let tree = period_tree(&yearly());
        let text = summarize(&tree, 1990, 1991).to_string();
        assert_eq!(text, "period: 1990 ..= 1991\nno entries in period\n");

        let text = summarize(&tree, 2019, 2022).to_string();
        assert!(text.contains("entries: 4"));
        assert!(text.contains("mean:    30.0"));
    }

    #[test]
    fn json_has_null_mean_for_empty_period() {
        let tree = period_tree(&yearly());
        let json: serde_json::Value =
            serde_json::from_str(&summarize(&tree, 0, 1).to_json().unwrap()).unwrap();
        assert_eq!(json["count"], 0);
        assert!(json["mean"].is_null());
    }
}
