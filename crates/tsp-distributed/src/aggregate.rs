//! Two-level reduction of search results.
//!
//! Lanes keep their own best; a worker process folds its lanes into one
//! [`BestReport`]; the coordinator folds the reports, in process order, into the
//! global best. A missing candidate (no feasible cycle seen) never beats a real
//! one at any level, and ties keep whichever was seen first.

use std::ops::AddAssign;

use crossbeam_channel::Receiver;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tsp_core::{path_distance, reduce, Candidate, City, DistanceMatrix};

use crate::distributor::ServeStats;
use crate::error::SolveError;
use crate::message::BestReport;

/// Work done by one lane, or summed over several.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Prefixes completed.
    pub prefixes: u64,
    /// Complete paths scored.
    pub evaluated: u64,
    /// Scored paths that were feasible cycles.
    pub feasible: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.prefixes += other.prefixes;
        self.evaluated += other.evaluated;
        self.feasible += other.feasible;
    }
}

/// Totals of a distributed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub prefixes_served: u64,
    pub done_replies: u64,
    pub search: SearchStats,
}

impl RunStats {
    pub(crate) fn new(serve: ServeStats, search: SearchStats) -> Self {
        Self { prefixes_served: serve.prefixes_served, done_replies: serve.done_replies, search }
    }
}

/// Folds one process's lane results, lane order deciding ties.
pub fn reduce_lanes<I>(process: usize, lanes: I) -> BestReport
where
    I: IntoIterator<Item = (Option<Candidate>, SearchStats)>,
{
    let mut stats = SearchStats::default();
    let best = reduce(lanes.into_iter().map(|(best, lane_stats)| {
        stats += lane_stats;
        best
    }));
    BestReport { process, best, stats }
}

/// Checks that a reported tour is a permutation starting at `start` and that
/// its claimed distance matches the matrix.
fn verify(
    matrix: &DistanceMatrix,
    start: City,
    process: usize,
    candidate: &Candidate,
) -> Result<(), SolveError> {
    let n = matrix.len();
    let invalid = |reason: String| SolveError::InconsistentReport { process, reason };

    if candidate.path.len() != n {
        return Err(invalid(format!("{} cities, expected {n}", candidate.path.len())));
    }
    if candidate.path[0] != start {
        return Err(invalid(format!("starts at {}, expected {start}", candidate.path[0])));
    }
    let mut seen = vec![false; n];
    for &city in &candidate.path {
        if city >= n || std::mem::replace(&mut seen[city], true) {
            return Err(invalid(format!("city {city} is out of range or repeated")));
        }
    }

    match path_distance(matrix, &candidate.path) {
        Some(distance) if distance == candidate.distance => Ok(()),
        Some(distance) => Err(invalid(format!(
            "claimed distance {}, recomputed {distance}",
            candidate.distance
        ))),
        None => Err(invalid("path uses a missing edge".to_owned())),
    }
}

/// Waits for one report per worker process, in increasing process order, and
/// keeps the global best.
pub fn collect_reports(
    matrix: &DistanceMatrix,
    start: City,
    reports: &[Receiver<BestReport>],
) -> Result<(Option<Candidate>, SearchStats), SolveError> {
    let mut best: Option<Candidate> = None;
    let mut stats = SearchStats::default();

    for (index, inbox) in reports.iter().enumerate() {
        let process = index + 1;
        let report = inbox
            .recv()
            .map_err(|_| SolveError::disconnected("best report"))?;
        if report.process != process {
            warn!("[0]: Report from {} arrived on the channel of {process}", report.process);
        }

        match &report.best {
            Some(candidate) => {
                verify(matrix, start, process, candidate)?;
                debug!("[0]: Process {process} best distance {}", candidate.distance);
            }
            None => debug!("[0]: Process {process} found no feasible cycle"),
        }

        stats += report.stats;
        best = reduce([best, report.best]);
    }

    match &best {
        Some(candidate) => info!("[0]: Best path: {candidate}"),
        None => info!("[0]: No solution found"),
    }
    Ok((best, stats))
}
