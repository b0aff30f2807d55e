//! `tree-bench`: compare BST and red-black range indexes on a replicated
//! time series.
//!
//! Usage:
//!   tree-bench [--config FILE.toml] [--series FILE.json] [--multiplier N]
//!              [--order ascending|descending|shuffled] [--queries Q]
//!              [--seed S] [--mode count|collect] [--json]
//!   tree-bench [--config FILE.toml] [--series FILE.json]
//!              [--from KEY|YYYY-MM[-DD]] [--to KEY|YYYY-MM[-DD]] [--json]
//!
//! Set `RUST_LOG=debug` for per-phase timings on stderr.

use std::io::{self, Write};

use tree_bench::cli::{execute, execute_period, render, render_period, CliArgs, USAGE};
use tree_bench::Result;

fn try_main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    let out = if args.is_period() {
        render_period(&args, &execute_period(&args)?)?
    } else {
        render(&args, &execute(&args)?)?
    };
    let mut stdout = io::stdout().lock();
    // A closed pipe is not worth an error exit.
    let _ = writeln!(stdout, "{}", out.trim_end());
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("error: {e}");
        if matches!(e, tree_bench::BenchError::Usage(_)) {
            eprintln!("{USAGE}");
        }
        std::process::exit(1);
    }
}
