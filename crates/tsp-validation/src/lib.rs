//! Serial-vs-distributed agreement checks over seeded instances.

use serde::{Deserialize, Serialize};
use tsp_core::GraphSpec;
use tsp_distributed::{SolveConfig, SolveError};

/// One line of the cross-check report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCheckRow {
    pub graph: GraphSpec,
    pub config: SolveConfig,
    /// Best serial distance, `None` meaning no Hamiltonian cycle.
    pub serial: Option<u32>,
    pub distributed: Option<u32>,
    pub serial_feasible: u64,
    pub distributed_feasible: u64,
    pub prefixes_served: u64,
    pub agree: bool,
}

/// Solves `graph` both ways and compares best distances and feasible-cycle counts.
pub fn cross_check(graph: GraphSpec, config: SolveConfig) -> Result<CrossCheckRow, SolveError> {
    // Both solvers assume a valid topology; reject it before generating anything.
    config.validate(graph.cities)?;
    let matrix = graph.generate();
    let serial = tsp_brute_force::solve(&matrix, config.start_city);
    let distributed = tsp_distributed::solve(&matrix, &config)?;

    let serial_best = serial.best.map(|b| b.distance);
    let distributed_best = distributed.best.map(|b| b.distance);

    Ok(CrossCheckRow {
        graph,
        config,
        serial: serial_best,
        distributed: distributed_best,
        serial_feasible: serial.feasible,
        distributed_feasible: distributed.stats.search.feasible,
        prefixes_served: distributed.stats.prefixes_served,
        agree: serial_best == distributed_best && serial.feasible == distributed.stats.search.feasible,
    })
}
