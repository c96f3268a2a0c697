use crossbeam_channel::Receiver;
use log::{debug, info};
use tsp_core::{City, DistanceMatrix, SearchBuffer, SearchWindow};

use crate::config::SolveConfig;
use crate::error::SolveError;
use crate::message::{PrefixReply, PrefixRequest};

/// Edge-feasible prefixes `path[0..K)` in lexicographic order.
pub struct PrefixStream<'m> {
    matrix: &'m DistanceMatrix,
    buffer: SearchBuffer,
    window: SearchWindow,
    pending: bool,
}

impl<'m> PrefixStream<'m> {
    pub fn new(matrix: &'m DistanceMatrix, start: City, prefix_len: usize) -> Self {
        let buffer = SearchBuffer::seeded(matrix.len(), start, prefix_len);
        let mut stream = Self {
            matrix,
            buffer,
            window: SearchWindow::new(1, prefix_len),
            pending: true,
        };
        if !stream.feasible() {
            stream.pending = stream.step();
        }
        stream
    }

    fn feasible(&self) -> bool {
        self.buffer.edges_feasible(self.matrix, self.window.hi)
    }

    /// Advances to the next prefix whose refilled positions are also connected.
    /// A prefix with a missing edge only completes to infeasible paths.
    fn step(&mut self) -> bool {
        loop {
            if !self.buffer.advance(self.matrix, self.window) {
                return false;
            }
            if self.feasible() {
                return true;
            }
        }
    }
}

impl Iterator for PrefixStream<'_> {
    type Item = Vec<City>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.pending {
            return None;
        }
        let prefix = self.buffer.path().to_vec();
        self.pending = self.step();
        Some(prefix)
    }
}

/// Coordinator side of the prefix rendezvous.
pub struct WorkDistributor<'m> {
    prefixes: PrefixStream<'m>,
    lanes: u64,
}

/// What the coordinator handed out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServeStats {
    pub prefixes_served: u64,
    pub done_replies: u64,
}

impl<'m> WorkDistributor<'m> {
    pub fn new(matrix: &'m DistanceMatrix, config: &SolveConfig) -> Self {
        Self {
            prefixes: PrefixStream::new(matrix, config.start_city, config.prefix_len),
            lanes: config.total_lanes() as u64,
        }
    }

    /// Answers requests in arrival order until every lane has been told to stop.
    ///
    /// Each request gets the next prefix while any remain, then [`PrefixReply::Done`].
    /// Returns once exactly one `Done` per lane has been delivered.
    pub fn serve(&mut self, requests: &Receiver<PrefixRequest>) -> Result<ServeStats, SolveError> {
        info!("[0]: Serving prefixes to {} lanes", self.lanes);
        let mut stats = ServeStats::default();

        while stats.done_replies < self.lanes {
            let request = requests
                .recv()
                .map_err(|_| SolveError::disconnected("prefix request"))?;

            let reply = match self.prefixes.next() {
                Some(prefix) => {
                    debug!("[0]: Send {:?} to {}", prefix, request.origin);
                    stats.prefixes_served += 1;
                    PrefixReply::Work(prefix)
                }
                None => {
                    debug!("[0]: Send done to {}", request.origin);
                    stats.done_replies += 1;
                    PrefixReply::Done
                }
            };

            request
                .reply
                .send(reply)
                .map_err(|_| SolveError::disconnected("prefix reply"))?;
        }

        info!(
            "[0]: Served {} prefixes, stopped {} lanes",
            stats.prefixes_served, stats.done_replies
        );
        Ok(stats)
    }
}
