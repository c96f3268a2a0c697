use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to start worker process {process}: {source}")]
    Spawn {
        process: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("{channel} channel disconnected")]
    Disconnected { channel: &'static str },
    #[error("worker process {process} panicked")]
    WorkerPanicked { process: usize },
    #[error("worker process {process} reported an invalid best path: {reason}")]
    InconsistentReport { process: usize, reason: String },
}

impl SolveError {
    pub(crate) fn disconnected(channel: &'static str) -> Self {
        Self::Disconnected { channel }
    }
}
