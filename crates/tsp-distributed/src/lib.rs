//! Distributed exhaustive TSP.
//!
//! One coordinator and `W` worker processes cooperate over message channels:
//!
//! 1. the coordinator broadcasts the distance matrix to every worker;
//! 2. worker lanes (a fixed-size pool of threads per process) pull prefixes of
//!    length `K` from the coordinator one at a time and exhaust every suffix
//!    of each;
//! 3. once the coordinator runs out of prefixes it answers each lane with
//!    [`PrefixReply::Done`], each process reduces its lanes' bests and reports
//!    once, and the coordinator reduces the reports to the global optimum.
//!
//! Worker processes are dedicated threads that own their copy of the matrix
//! and share nothing with the coordinator except channels.

pub mod aggregate;
pub mod cluster;
pub mod config;
pub mod distributor;
pub mod error;
pub mod message;
pub mod worker;

pub use aggregate::{RunStats, SearchStats};
pub use cluster::{solve, Solution};
pub use config::{ConfigError, SolveConfig};
pub use distributor::{PrefixStream, ServeStats, WorkDistributor};
pub use error::SolveError;
pub use message::{BestReport, MatrixBroadcast, Origin, PrefixReply, PrefixRequest};
pub use worker::SearchWorker;
