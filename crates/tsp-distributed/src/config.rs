use serde::{Deserialize, Serialize};
use thiserror::Error;
use tsp_core::City;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("need at least two cities, got {0}")]
    TooFewCities(usize),
    #[error("need at least one worker process")]
    NoWorkers,
    #[error("pool size must be at least 1")]
    EmptyPool,
    #[error("prefix length {prefix_len} must satisfy 0 < K < {cities}")]
    PrefixLength { prefix_len: usize, cities: usize },
    #[error("start city {start_city} out of range for {cities} cities")]
    StartCity { start_city: City, cities: usize },
}

/// Topology and work split of one distributed solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Worker processes, excluding the coordinator.
    pub workers: usize,
    /// Search lanes per worker process.
    pub pool_size: usize,
    /// Positions `[0, K)` enumerated by the coordinator.
    pub prefix_len: usize,
    pub start_city: City,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self { workers: 2, pool_size: 2, prefix_len: 5, start_city: 0 }
    }
}

impl SolveConfig {
    pub fn validate(&self, cities: usize) -> Result<(), ConfigError> {
        if cities < 2 {
            return Err(ConfigError::TooFewCities(cities));
        }
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.prefix_len == 0 || self.prefix_len >= cities {
            return Err(ConfigError::PrefixLength { prefix_len: self.prefix_len, cities });
        }
        if self.start_city >= cities {
            return Err(ConfigError::StartCity { start_city: self.start_city, cities });
        }
        Ok(())
    }

    /// Done replies the coordinator owes before every lane has stopped.
    pub fn total_lanes(&self) -> usize {
        self.workers * self.pool_size
    }
}
