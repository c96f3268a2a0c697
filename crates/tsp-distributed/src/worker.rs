use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, info, trace};
use tsp_core::{path_distance, Candidate, City, DistanceMatrix, SearchBuffer, SearchWindow};

use crate::aggregate::{reduce_lanes, SearchStats};
use crate::config::SolveConfig;
use crate::error::SolveError;
use crate::message::{BestReport, MatrixBroadcast, Origin, PrefixReply, PrefixRequest};

/// One lane of a worker process's pool.
///
/// Owns its path buffer for its whole life and keeps the best cycle across
/// every prefix it completes.
pub struct SearchWorker<'m> {
    origin: Origin,
    matrix: &'m DistanceMatrix,
    buffer: SearchBuffer,
    window: SearchWindow,
    best: Option<Candidate>,
    stats: SearchStats,
}

impl<'m> SearchWorker<'m> {
    pub fn new(origin: Origin, matrix: &'m DistanceMatrix, prefix_len: usize) -> Self {
        let n = matrix.len();
        Self {
            origin,
            matrix,
            // Overwritten by the first prefix.
            buffer: SearchBuffer::seeded(n, 0, n),
            window: SearchWindow::new(prefix_len, n),
            best: None,
            stats: SearchStats::default(),
        }
    }

    /// Scores every completion of `prefix`.
    pub fn search_prefix(&mut self, prefix: &[City]) {
        self.buffer.reset_from_prefix(prefix);
        self.stats.prefixes += 1;

        loop {
            self.stats.evaluated += 1;
            if let Some(distance) = path_distance(self.matrix, self.buffer.path()) {
                self.stats.feasible += 1;
                if self.best.as_ref().map_or(true, |best| distance < best.distance) {
                    trace!("{}: New best {distance}", self.origin);
                    self.best = Some(Candidate { path: self.buffer.path().to_vec(), distance });
                }
            }

            if !self.buffer.advance(self.matrix, self.window) {
                break;
            }
        }
    }

    /// Pulls prefixes until the coordinator answers `Done`.
    pub fn run(
        mut self,
        requests: &Sender<PrefixRequest>,
    ) -> Result<(Option<Candidate>, SearchStats), SolveError> {
        loop {
            // The request owns the only reply sender, so a request dropped
            // unanswered shows up here as a disconnect.
            let (reply_tx, reply_rx) = bounded(1);

            debug!("{}: Request next path", self.origin);
            requests
                .send(PrefixRequest { origin: self.origin, reply: reply_tx })
                .map_err(|_| SolveError::disconnected("prefix request"))?;

            match reply_rx.recv().map_err(|_| SolveError::disconnected("prefix reply"))? {
                PrefixReply::Work(prefix) => {
                    debug!("{}: Path {:?}", self.origin, prefix);
                    self.search_prefix(&prefix);
                }
                PrefixReply::Done => break,
            }
        }

        debug!(
            "{}: Done after {} prefixes, best {:?}",
            self.origin,
            self.stats.prefixes,
            self.best.as_ref().map(|b| b.distance)
        );
        Ok((self.best, self.stats))
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Body of a worker process: receive the matrix, run the lane pool to
/// completion, report the process best once.
pub fn run_process(
    process: usize,
    config: SolveConfig,
    inbox: Receiver<MatrixBroadcast>,
    requests: Sender<PrefixRequest>,
    report: Sender<BestReport>,
) -> Result<(), SolveError> {
    debug!("[{process}]: Receive matrix");
    let MatrixBroadcast(matrix) = inbox
        .recv()
        .map_err(|_| SolveError::disconnected("matrix broadcast"))?;
    info!("[{process}]: Start with {} lanes", config.pool_size);

    // One sender per lane; the process itself must not keep the channel open.
    let senders: Vec<_> = (0..config.pool_size).map(|_| requests.clone()).collect();
    drop(requests);

    let lanes = thread::scope(|scope| {
        let handles: Vec<_> = senders
            .into_iter()
            .enumerate()
            .map(|(lane, requests)| {
                let worker = SearchWorker::new(Origin { process, lane }, &matrix, config.prefix_len);
                scope.spawn(move || worker.run(&requests))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(_) => Err(SolveError::WorkerPanicked { process }),
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    let best = reduce_lanes(process, lanes);
    debug!("[{process}]: Send best {:?}", best.best.as_ref().map(|b| b.distance));
    report
        .send(best)
        .map_err(|_| SolveError::disconnected("best report"))?;

    info!("[{process}]: End");
    Ok(())
}
