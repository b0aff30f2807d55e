//! Side-by-side BST / red-black measurement.

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, info};
use range_forest::{BstMap, OrderedMap, RbMap};
use serde::{Serialize, Serializer};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::order::QueryMode;
use crate::series::BaseSeries;
use crate::workload::{make_items, make_ranges, Item};

fn millis<S: Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_nanos() as f64 / 1e6)
}

/// Outcome of one benchmark run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchResult {
    pub n_items: usize,
    pub n_queries: usize,
    #[serde(rename = "bst_build_ms", serialize_with = "millis")]
    pub bst_build: Duration,
    #[serde(rename = "rbt_build_ms", serialize_with = "millis")]
    pub rbt_build: Duration,
    #[serde(rename = "bst_query_ms", serialize_with = "millis")]
    pub bst_query: Duration,
    #[serde(rename = "rbt_query_ms", serialize_with = "millis")]
    pub rbt_query: Duration,
    pub bst_height: usize,
    pub rbt_height: usize,
    pub bst_hits: usize,
    pub rbt_hits: usize,
}

/// Inserts `items` in order into an empty map, timing the whole sequence.
fn build<M>(items: &[Item]) -> (M, Duration)
where
    M: OrderedMap<i64, f64> + Default,
{
    let start = Instant::now();
    let mut map = M::default();
    for &(k, v) in items {
        map.insert(k, v);
    }
    (map, start.elapsed())
}

/// Runs every range against `map`, returning the summed result sizes.
fn query<M>(map: &M, ranges: &[(i64, i64)], mode: QueryMode) -> (usize, Duration)
where
    M: OrderedMap<i64, f64>,
{
    let start = Instant::now();
    let hits = match mode {
        QueryMode::Count => ranges
            .iter()
            .map(|(lo, hi)| map.range_count(lo, hi))
            .sum(),
        QueryMode::Collect => ranges
            .iter()
            .map(|(lo, hi)| black_box(map.range_items(lo, hi)).len())
            .sum(),
    };
    (hits, start.elapsed())
}

/// Builds a fresh BST and a fresh red-black tree from the same `items` in
/// the same order, then runs the same `ranges` against each.
///
/// The phases run strictly one after another (BST build, RBT build, BST
/// queries, RBT queries) so each timing covers exactly one of them.
pub fn bench(items: &[Item], ranges: &[(i64, i64)], mode: QueryMode) -> BenchResult {
    let (bst, bst_build) = build::<BstMap<i64, f64>>(items);
    debug!("bst built: {} nodes in {bst_build:?}", bst.len());
    let (rbt, rbt_build) = build::<RbMap<i64, f64>>(items);
    debug!("rbt built: {} nodes in {rbt_build:?}", rbt.len());

    let (bst_hits, bst_query) = query(&bst, ranges, mode);
    debug!("bst answered {} ranges in {bst_query:?}", ranges.len());
    let (rbt_hits, rbt_query) = query(&rbt, ranges, mode);
    debug!("rbt answered {} ranges in {rbt_query:?}", ranges.len());

    BenchResult {
        n_items: items.len(),
        n_queries: ranges.len(),
        bst_build,
        rbt_build,
        bst_query,
        rbt_query,
        bst_height: bst.height(),
        rbt_height: rbt.height(),
        bst_hits,
        rbt_hits,
    }
}

/// Full run: validate `config`, replicate `base`, draw ranges from the
/// replicated keys with the same seed, bench both trees.
///
/// Any preparation error is returned before a tree is built.
pub fn run(config: &BenchConfig, base: &BaseSeries) -> Result<BenchResult> {
    config.validate()?;
    let items = make_items(base, config.multiplier, config.order, config.seed)?;
    let keys: Vec<i64> = items.iter().map(|&(k, _)| k).collect();
    let ranges = make_ranges(&keys, config.query_count, config.seed);
    info!(
        "benchmarking {} items ({} order), {} {} queries, seed {}",
        items.len(),
        config.order,
        ranges.len(),
        config.query_mode,
        config.seed
    );
    Ok(bench(&items, &ranges, config.query_mode))
}
