//! Benchmark harness comparing [`range_forest::BstMap`] with
//! [`range_forest::RbMap`].
//!
//! A run replicates a base series of `(timestamp, value)` items
//! `multiplier` times at non-colliding key offsets, feeds the result to both
//! trees in one [`InsertionOrder`], then answers the same seeded batch of
//! inclusive range queries on each. The [`BenchResult`] records build and
//! query times, final heights, and summed range hits.
//!
//! [`period`] answers the lookup the benchmark is modelled on: load a series
//! into a red-black tree and summarize one `[lo, hi]` period of it.
//!
//! ```no_run
//! use tree_bench::{run, BaseSeries, BenchConfig, InsertionOrder};
//!
//! let config = BenchConfig { order: InsertionOrder::Shuffled, ..BenchConfig::default() };
//! let base = BaseSeries::monthly(config.start_year, config.months, config.seed)?;
//! let result = run(&config, &base)?;
//! println!("{result}");
//! # Ok::<(), tree_bench::BenchError>(())
//! ```

pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod order;
pub mod period;
pub mod report;
pub mod rng;
pub mod series;
pub mod workload;

pub use bench::{bench, run, BenchResult};
pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use order::{InsertionOrder, QueryMode};
pub use period::{query_period, summarize, PeriodSummary};
pub use series::BaseSeries;
pub use workload::{make_items, make_ranges, Item};
