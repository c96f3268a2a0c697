//! Serial exhaustive solver.
//!
//! Walks every assignment of positions `[1, N)` with a single generator and
//! scores each complete path. Slow, but it shares nothing with the
//! distributed engine beyond the core primitives, which makes it the oracle the
//! other solver is checked against.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use tsp_core::{Candidate, City, DistanceMatrix, SearchBuffer, SearchWindow};

/// Result of a serial run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Shortest feasible cycle, or `None` if the graph has no Hamiltonian cycle.
    pub best: Option<Candidate>,
    /// Complete paths scored.
    pub evaluated: u64,
    /// Scored paths that turned out to be feasible cycles.
    pub feasible: u64,
}

/// Exhaustively searches every Hamiltonian cycle starting at `start`.
///
/// # Panics
/// If `start` is not a city of `matrix`.
pub fn solve(matrix: &DistanceMatrix, start: City) -> Outcome {
    let n = matrix.len();
    info!("Searching solution over {n} cities from {start}");

    let mut buffer = SearchBuffer::seeded(n, start, n);
    let window = SearchWindow::new(1, n);

    let mut best: Option<Candidate> = None;
    let mut evaluated = 0u64;
    let mut feasible = 0u64;

    loop {
        evaluated += 1;
        if let Some(distance) = tsp_core::path_distance(matrix, buffer.path()) {
            feasible += 1;
            if best.as_ref().map_or(true, |b| distance < b.distance) {
                trace!("Improved to {distance}: {:?}", buffer.path());
                best = Some(Candidate { path: buffer.path().to_vec(), distance });
            }
        }

        if !buffer.advance(matrix, window) {
            break;
        }
    }

    debug!("Scored {evaluated} paths, {feasible} feasible");
    match &best {
        Some(b) => info!("Best path: {b}"),
        None => info!("No solution found"),
    }

    Outcome { best, evaluated, feasible }
}
