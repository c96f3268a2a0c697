//! Messages exchanged between the coordinator and worker processes.

use std::fmt;

use crossbeam_channel::Sender;
use tsp_core::{Candidate, City, DistanceMatrix};

use crate::aggregate::SearchStats;

/// Who sent a request: worker process index (1-based, 0 is the coordinator)
/// and lane within that process's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Origin {
    pub process: usize,
    pub lane: usize,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{{t{}}}]", self.process, self.lane)
    }
}

/// Coordinator to each worker process, once, before any search.
#[derive(Clone, Debug)]
pub struct MatrixBroadcast(pub DistanceMatrix);

/// Lane to coordinator: "give me the next prefix". Carries the lane's reply
/// channel so the coordinator can answer whichever request arrived first.
#[derive(Debug)]
pub struct PrefixRequest {
    pub origin: Origin,
    pub reply: Sender<PrefixReply>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrefixReply {
    /// Positions `[0, K)` of a path to complete.
    Work(Vec<City>),
    /// No prefixes left; the lane stops.
    Done,
}

/// Worker process to coordinator, exactly once, after its whole pool drained.
#[derive(Clone, Debug)]
pub struct BestReport {
    pub process: usize,
    pub best: Option<Candidate>,
    pub stats: SearchStats,
}
