use thiserror::Error;

/// Failures while laying out obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MazeError {
    /// The observer asked generation to stop. Walls placed so far remain.
    #[error("maze generation aborted")]
    Aborted,

    #[error("obstacle density must be within [0, 1], got {0}")]
    Density(f64),
}
