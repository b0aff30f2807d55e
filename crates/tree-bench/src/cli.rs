//! Command-line surface of the `tree-bench` binary.
//!
//! Usage:
//!   tree-bench [--config FILE.toml] [--series FILE.json] [--multiplier N]
//!              [--order ascending|descending|shuffled] [--queries Q]
//!              [--seed S] [--mode count|collect] [--json]
//!   tree-bench [--config FILE.toml] [--series FILE.json]
//!              [--from KEY|YYYY-MM[-DD]] [--to KEY|YYYY-MM[-DD]] [--json]
//!
//! Flags override values read from `--config`. Either `--from` or `--to`
//! switches from benchmarking to a period lookup over the base series.

use std::path::PathBuf;

use crate::bench::{run, BenchResult};
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::order::{InsertionOrder, QueryMode};
use crate::period::{parse_bound, query_period, PeriodSummary};

pub const USAGE: &str = "\
usage: tree-bench [--config FILE.toml] [--series FILE.json] [--multiplier N]
                  [--order ascending|descending|shuffled] [--queries Q]
                  [--seed S] [--mode count|collect] [--json]
       tree-bench [--config FILE.toml] [--series FILE.json]
                  [--from KEY|YYYY-MM[-DD]] [--to KEY|YYYY-MM[-DD]] [--json]";

/// Parsed command line. `None` fields fall back to the config file, then to
/// [`BenchConfig::default`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub series: Option<PathBuf>,
    pub multiplier: Option<u32>,
    pub order: Option<InsertionOrder>,
    pub query_count: Option<usize>,
    pub seed: Option<u64>,
    pub query_mode: Option<QueryMode>,
    /// Lower bound of a period lookup.
    pub from: Option<i64>,
    /// Upper bound of a period lookup.
    pub to: Option<i64>,
    pub json: bool,
    pub help: bool,
}

fn number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        BenchError::Usage(format!(
            "{flag} expects a non-negative integer, got `{value}`"
        ))
    })
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let mut out = Self::default();
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_ref();
            match flag {
                "--json" => out.json = true,
                "-h" | "--help" => out.help = true,
                "--config"
                | "--series"
                | "--multiplier"
                | "--order"
                | "--queries"
                | "--seed"
                | "--mode"
                | "--from"
                | "--to" => {
                    i += 1;
                    let value: &str = args
                        .get(i)
                        .map(|v| v.as_ref())
                        .ok_or_else(|| BenchError::Usage(format!("{flag} needs a value")))?;
                    match flag {
                        "--config" => out.config = Some(PathBuf::from(value)),
                        "--series" => out.series = Some(PathBuf::from(value)),
                        "--multiplier" => out.multiplier = Some(number(flag, value)?),
                        "--order" => out.order = Some(value.parse()?),
                        "--queries" => out.query_count = Some(number(flag, value)?),
                        "--seed" => out.seed = Some(number(flag, value)?),
                        "--mode" => out.query_mode = Some(value.parse()?),
                        "--from" => out.from = Some(parse_bound(value)?),
                        _ => out.to = Some(parse_bound(value)?),
                    }
                }
                other => return Err(BenchError::Usage(format!("unknown argument `{other}`"))),
            }
            i += 1;
        }
        Ok(out)
    }

    /// A period bound was given, so the run is a lookup, not a benchmark.
    pub fn is_period(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Applies every flag that was given on top of `config`.
    pub fn apply(&self, config: &mut BenchConfig) {
        if let Some(series) = &self.series {
            config.series = Some(series.clone());
        }
        if let Some(multiplier) = self.multiplier {
            config.multiplier = multiplier;
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(query_count) = self.query_count {
            config.query_count = query_count;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(query_mode) = self.query_mode {
            config.query_mode = query_mode;
        }
    }

    /// Effective configuration: the config file if any, then the flags.
    pub fn resolve(&self) -> Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::load(path)?,
            None => BenchConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }
}

/// Resolves the configuration, loads the base series and runs the benchmark.
pub fn execute(args: &CliArgs) -> Result<BenchResult> {
    let config = args.resolve()?;
    let base = config.base_series()?;
    run(&config, &base)
}

/// Resolves the configuration, loads the base series and summarizes the
/// `--from` / `--to` period of it.
pub fn execute_period(args: &CliArgs) -> Result<PeriodSummary> {
    let config = args.resolve()?;
    let base = config.base_series()?;
    Ok(query_period(&base, args.from, args.to))
}

/// Renders `result` the way `args` asks for.
pub fn render(args: &CliArgs, result: &BenchResult) -> Result<String> {
    if args.json {
        result.to_json()
    } else {
        Ok(result.to_string())
    }
}

pub fn render_period(args: &CliArgs, summary: &PeriodSummary) -> Result<String> {
    if args.json {
        summary.to_json()
    } else {
        Ok(summary.to_string())
    }
}
