use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::matrix::{DistanceMatrix, MAX_WEIGHT, NO_EDGE};

/// Parameters of a random sparse directed graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub cities: usize,
    /// Chance, in percent, that any ordered pair of distinct cities is joined.
    pub edge_percent: u32,
    pub seed: u64,
}

impl Default for GraphSpec {
    fn default() -> Self {
        Self { cities: 20, edge_percent: 40, seed: 0 }
    }
}

impl GraphSpec {
    pub fn generate(&self) -> DistanceMatrix {
        generate(self.cities, self.edge_percent, self.seed)
    }
}

/// Generates a random directed graph. Pure in its arguments: the same
/// `(n, edge_percent, seed)` always yields the same matrix.
///
/// Every ordered pair `i != j` rolls `0..100`; below `edge_percent` the edge
/// exists with a weight in `1..=99`, otherwise it is absent.
///
/// # Panics
/// If `n == 0`.
pub fn generate(n: usize, edge_percent: u32, seed: u64) -> DistanceMatrix {
    assert!(n > 0, "cannot generate a graph without cities");

    let percent = edge_percent.min(100);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut cells = vec![0; n * n];

    for from in 0..n {
        for to in 0..n {
            if from == to {
                continue;
            }
            cells[from * n + to] = if rng.gen_range(0..100) < percent {
                rng.gen_range(1..=MAX_WEIGHT)
            } else {
                NO_EDGE
            };
        }
    }

    DistanceMatrix::new_unchecked(n, cells)
}
