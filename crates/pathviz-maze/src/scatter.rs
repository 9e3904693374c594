//! Random obstacle fields.

use pathviz_core::GridGraph;
use pathviz_paths::{Observer, VisitEvent};
use rand::{Rng, RngExt};

use crate::error::MazeError;
use crate::maze::MazeGen;

/// Share of non-terminal nodes turned into obstacles by default.
pub const DEFAULT_DENSITY: f64 = 0.25;

impl<R: Rng> MazeGen<R> {
    /// Clear non-terminal nodes, then wall each one with probability
    /// `density`, in row-major order.
    ///
    /// Returns the number of walls placed; `obs` gets one `Enqueued` event
    /// per wall.
    pub fn scatter<O: Observer>(
        &mut self,
        graph: &mut GridGraph,
        density: f64,
        obs: &mut O,
    ) -> Result<usize, MazeError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(MazeError::Density(density));
        }
        graph.reset_non_terminal();
        let mut walls = 0;
        for p in graph.bounds().iter() {
            if graph.is_terminal(p) {
                continue;
            }
            if self.rng.random_bool(density) && graph.wall(p) {
                obs.on_event(VisitEvent::enqueued(p));
                walls += 1;
            }
        }
        log::debug!("scatter {0}x{0} at {density}: {walls} walls", graph.size());
        Ok(walls)
    }
}
