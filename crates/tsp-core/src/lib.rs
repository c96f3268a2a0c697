//! Shared primitives for exhaustive TSP over sparse directed graphs.
//!
//! Both the serial reference solver and the distributed engine are built on
//! the same three pieces: an immutable [`DistanceMatrix`], the [`Candidate`]
//! scoring rules, and the window-constrained permutation generator in
//! [`permutation`].

pub mod error;
pub mod generate;
pub mod matrix;
pub mod path;
pub mod permutation;

pub use error::MatrixError;
pub use generate::{generate, GraphSpec};
pub use matrix::{DistanceMatrix, NO_EDGE};
pub use path::{better, path_distance, reduce, Candidate};
pub use permutation::{advance, SearchBuffer, SearchWindow};

/// City index. Position 0 of every path holds the start city.
pub type City = usize;
