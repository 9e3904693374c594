//! Per-session configuration.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::error::{GraphError, GraphResult};
use crate::grid::DEFAULT_SIZE;

/// Settings fixed for the lifetime of one design session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Grid side length N.
    pub size: i32,
    /// Number of intermediate stops K.
    pub stops: usize,
    /// Seed for maze generation and obstacle scattering. `None` draws a
    /// fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            stops: 0,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    pub fn with_stops(mut self, stops: usize) -> Self {
        self.stops = stops;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the grid can hold a Source, K Stops and an End on distinct
    /// nodes.
    pub fn validate(&self) -> GraphResult<()> {
        if self.size < 1 {
            return Err(GraphError::Config(format!(
                "grid size must be at least 1, got {}",
                self.size
            )));
        }
        let nodes = (self.size as usize) * (self.size as usize);
        if self.stops + 2 > nodes {
            return Err(GraphError::Config(format!(
                "{} stops do not fit with a source and an end in a {}x{} grid",
                self.stops, self.size, self.size
            )));
        }
        Ok(())
    }

    /// The configured seed, or a freshly drawn one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }

    /// A deterministic RNG for this session's random layout operations.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed_or_random())
    }
}
