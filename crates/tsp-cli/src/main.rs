use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use tsp_core::{Candidate, GraphSpec};
use tsp_distributed::{RunStats, SolveConfig};

/// Exhaustive TSP over a random sparse directed graph.
#[derive(Debug, Parser)]
#[command(name = "tsp")]
struct Args {
    #[arg(long, default_value_t = 20)]
    cities: usize,
    /// Chance, in percent, that a directed edge exists.
    #[arg(long, default_value_t = 40)]
    percent: u32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Worker processes besides the coordinator.
    #[arg(long, default_value_t = 2)]
    workers: usize,
    /// Search lanes per worker process.
    #[arg(long, default_value_t = 2)]
    pool_size: usize,
    /// Path positions enumerated by the coordinator.
    #[arg(long, default_value_t = 5)]
    prefix_len: usize,
    #[arg(long, default_value_t = 0)]
    start_city: usize,
    /// Use the single-threaded solver instead.
    #[arg(long)]
    serial: bool,
    /// Print the outcome as a JSON object.
    #[arg(long)]
    json: bool,
    /// Skip printing the matrix.
    #[arg(long)]
    quiet: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    graph: GraphSpec,
    solver: &'static str,
    best: Option<&'a Candidate>,
    evaluated: u64,
    feasible: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    distributed: Option<RunStats>,
    seconds: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let graph = GraphSpec { cities: args.cities, edge_percent: args.percent, seed: args.seed };
    anyhow::ensure!(graph.cities > 0, "need at least one city");

    info!("Generate matrix");
    let matrix = graph.generate();
    if !args.quiet && !args.json {
        println!("Generated, matrix:\n{matrix}");
    }

    let started = Instant::now();
    let (best, evaluated, feasible, distributed, solver) = if args.serial {
        anyhow::ensure!(args.start_city < graph.cities, "start city out of range");
        let outcome = tsp_brute_force::solve(&matrix, args.start_city);
        (outcome.best, outcome.evaluated, outcome.feasible, None, "serial")
    } else {
        let config = SolveConfig {
            workers: args.workers,
            pool_size: args.pool_size,
            prefix_len: args.prefix_len,
            start_city: args.start_city,
        };
        let solution = tsp_distributed::solve(&matrix, &config).context("distributed solve failed")?;
        let search = solution.stats.search;
        (solution.best, search.evaluated, search.feasible, Some(solution.stats), "distributed")
    };
    let seconds = started.elapsed().as_secs_f64();

    if args.json {
        let report = Report { graph, solver, best: best.as_ref(), evaluated, feasible, distributed, seconds };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &best {
            Some(candidate) => println!("Best path: {candidate}"),
            None => println!("No solution found"),
        }
    }

    info!("Total time: {seconds:.6}");
    Ok(())
}
