use std::io::{self, Write};
use std::ops::Range;

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use log::{info, warn};
use tsp_core::GraphSpec;
use tsp_distributed::SolveConfig;
use tsp_validation::cross_check;

/// Runs the serial and distributed solvers over a range of seeds and prints
/// one JSON line per instance.
#[derive(Debug, Parser)]
#[command(name = "cross-check")]
struct Args {
    #[arg(long, default_value_t = 9)]
    cities: usize,
    #[arg(long, default_value_t = 40)]
    percent: u32,
    /// Seed range, `start..end` (end exclusive).
    #[arg(long, default_value = "0..10", value_parser = parse_range)]
    seeds: Range<u64>,
    #[arg(long, default_value_t = 2)]
    workers: usize,
    #[arg(long, default_value_t = 2)]
    pool_size: usize,
    #[arg(long, default_value_t = 3)]
    prefix_len: usize,
    #[arg(long, default_value_t = 0)]
    start_city: usize,
}

fn parse_range(raw: &str) -> Result<Range<u64>, String> {
    let (start, end) = raw
        .split_once("..")
        .ok_or_else(|| format!("expected start..end, got {raw:?}"))?;
    let start = start.trim().parse().map_err(|e| format!("bad range start: {e}"))?;
    let end = end.trim().parse().map_err(|e| format!("bad range end: {e}"))?;
    Ok(start..end)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.cities > 0, "need at least one city");
    ensure!(args.seeds.start < args.seeds.end, "empty seed range {:?}", args.seeds);

    let config = SolveConfig {
        workers: args.workers,
        pool_size: args.pool_size,
        prefix_len: args.prefix_len,
        start_city: args.start_city,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut disagreements = Vec::new();

    for seed in args.seeds.clone() {
        let graph = GraphSpec { cities: args.cities, edge_percent: args.percent, seed };
        let row = cross_check(graph, config).with_context(|| format!("seed {seed}"))?;
        if !row.agree {
            warn!("Seed {seed}: serial {:?}, distributed {:?}", row.serial, row.distributed);
            disagreements.push(seed);
        }
        serde_json::to_writer(&mut out, &row).context("writing report row")?;
        writeln!(out)?;
    }

    if !disagreements.is_empty() {
        bail!("solvers disagree on seeds {disagreements:?}");
    }
    info!("All {} seeds agree", args.seeds.end.saturating_sub(args.seeds.start));
    Ok(())
}
