use std::fs;
use std::path::PathBuf;

use tree_bench::cli::{execute, CliArgs};
use tree_bench::{
    bench, make_items, make_ranges, run, BaseSeries, BenchConfig, BenchError, InsertionOrder,
    QueryMode,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tree-bench-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn small(order: InsertionOrder) -> BenchConfig {
    BenchConfig {
        multiplier: 20,
        order,
        query_count: 100,
        ..BenchConfig::default()
    }
}

#[test]
fn smoke() {
    let base = BaseSeries::monthly(2018, 90, 42).unwrap();
    let result = run(&small(InsertionOrder::Shuffled), &base).unwrap();
    assert_eq!(result.n_items, 1_800);
    assert_eq!(result.n_queries, 100);
    assert!(result.hits_agree());
}

#[test]
fn sorted_orders_degenerate_the_bst_only() {
    let base = BaseSeries::monthly(2018, 90, 42).unwrap();
    for order in [InsertionOrder::Ascending, InsertionOrder::Descending] {
        let result = run(&small(order), &base).unwrap();
        assert_eq!(result.bst_height, 1_800, "{order}");
        // 2·log₂(1801) ≈ 21.6
        assert!(result.rbt_height <= 21, "{order}: {}", result.rbt_height);
        assert!(result.hits_agree());
    }
}

#[test]
fn shuffled_bst_is_shallow() {
    let base = BaseSeries::monthly(2018, 90, 42).unwrap();
    let result = run(&small(InsertionOrder::Shuffled), &base).unwrap();
    assert!(result.bst_height < 100, "{}", result.bst_height);
    assert!(result.rbt_height <= 21);
}

#[test]
fn count_and_collect_agree() {
    let base = BaseSeries::monthly(2018, 30, 1).unwrap();
    let items = make_items(&base, 4, InsertionOrder::Shuffled, 1).unwrap();
    let keys: Vec<i64> = items.iter().map(|&(k, _)| k).collect();
    let ranges = make_ranges(&keys, 50, 1);
    let count = bench(&items, &ranges, QueryMode::Count);
    let collect = bench(&items, &ranges, QueryMode::Collect);
    assert_eq!(count.bst_hits, collect.bst_hits);
    assert_eq!(count.rbt_hits, collect.rbt_hits);
    assert!(count.hits_agree());
    // Each range is bounded by existing keys, so it holds at least one.
    assert!(count.bst_hits >= ranges.len());
}

#[test]
fn preparation_errors_yield_no_result() {
    let base = BaseSeries::monthly(2018, 12, 42).unwrap();
    let config = BenchConfig {
        multiplier: 0,
        ..BenchConfig::default()
    };
    assert!(matches!(
        run(&config, &base),
        Err(BenchError::ZeroMultiplier)
    ));

    let wide = BaseSeries::new(vec![(0, 0.0), (i64::MAX / 4, 0.0)]).unwrap();
    let config = BenchConfig {
        multiplier: 10,
        ..BenchConfig::default()
    };
    assert!(matches!(
        run(&config, &wide),
        Err(BenchError::KeyOverflow { .. })
    ));
}

#[test]
fn config_file_and_series_file() {
    let dir = scratch_dir("files");
    fs::write(
        dir.join("series.json"),
        "[[30, 3.0], [10, 1.0], [20, 2.0]]",
    )
    .unwrap();
    fs::write(
        dir.join("bench.toml"),
        "multiplier = 4\norder = \"descending\"\nquery_count = 8\nseries = \"series.json\"\n",
    )
    .unwrap();
    let config_path = dir.join("bench.toml");

    let config_arg = config_path.to_str().unwrap();
    let args = CliArgs::parse(["--config", config_arg, "--queries", "5"]).unwrap();
    let result = execute(&args).unwrap();
    assert_eq!(result.n_items, 12);
    assert_eq!(result.n_queries, 5);
    assert_eq!(result.bst_height, 12);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn bad_series_file_is_reported() {
    let dir = scratch_dir("bad-series");
    let path = dir.join("series.json");
    fs::write(&path, "[[1, 1.0], [1, 2.0]]").unwrap();
    let args = CliArgs::parse(["--series", path.to_str().unwrap()]).unwrap();
    assert!(matches!(execute(&args), Err(BenchError::DuplicateKey(1))));

    let missing = dir.join("nope.json");
    let args = CliArgs::parse(["--series", missing.to_str().unwrap()]).unwrap();
    assert!(matches!(execute(&args), Err(BenchError::Io { .. })));

    let _ = fs::remove_dir_all(dir);
}
