use std::thread;

use crossbeam_channel::{bounded, Sender};
use log::info;
use serde::{Deserialize, Serialize};
use tsp_core::{Candidate, DistanceMatrix};

use crate::aggregate::{collect_reports, RunStats};
use crate::config::SolveConfig;
use crate::distributor::WorkDistributor;
use crate::error::SolveError;
use crate::message::{MatrixBroadcast, PrefixRequest};
use crate::worker::run_process;

/// Outcome of a distributed solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Shortest feasible cycle, or `None` when the graph has no Hamiltonian cycle.
    pub best: Option<Candidate>,
    pub stats: RunStats,
}

/// Runs one coordinator (on the calling thread) and `config.workers` worker
/// processes over `matrix`.
pub fn solve(matrix: &DistanceMatrix, config: &SolveConfig) -> Result<Solution, SolveError> {
    config.validate(matrix.len())?;
    let config = *config;
    info!(
        "[0]: Solving {} cities with {} workers x {} lanes, prefix length {}",
        matrix.len(),
        config.workers,
        config.pool_size,
        config.prefix_len
    );

    // Rendezvous: a lane blocks until the coordinator takes its request.
    let (request_tx, request_rx) = bounded::<PrefixRequest>(0);

    let mut inboxes: Vec<Sender<MatrixBroadcast>> = Vec::with_capacity(config.workers);
    let mut reports = Vec::with_capacity(config.workers);
    let mut handles = Vec::with_capacity(config.workers);

    for process in 1..=config.workers {
        let (matrix_tx, matrix_rx) = bounded(1);
        let (report_tx, report_rx) = bounded(1);
        let requests = request_tx.clone();

        let handle = thread::Builder::new()
            .name(format!("tsp-worker-{process}"))
            .spawn(move || run_process(process, config, matrix_rx, requests, report_tx))
            .map_err(|source| SolveError::Spawn { process, source })?;

        inboxes.push(matrix_tx);
        reports.push(report_rx);
        handles.push((process, handle));
    }
    drop(request_tx);

    for (index, inbox) in inboxes.iter().enumerate() {
        info!("[0]: Send matrix to {}", index + 1);
        inbox
            .send(MatrixBroadcast(matrix.clone()))
            .map_err(|_| SolveError::disconnected("matrix broadcast"))?;
    }

    let served = WorkDistributor::new(matrix, &config).serve(&request_rx)?;
    let (best, search) = collect_reports(matrix, config.start_city, &reports)?;

    for (process, handle) in handles {
        handle
            .join()
            .map_err(|_| SolveError::WorkerPanicked { process })??;
    }

    Ok(Solution { best, stats: RunStats::new(served, search) })
}
