//! Errors raised by grid mutation and terminal placement.

use thiserror::Error;

use crate::geom::Point;
use crate::role::Role;

/// Illegal changes to a [`GridGraph`](crate::GridGraph) or
/// [`Layout`](crate::Layout).
///
/// These are caller errors: they are surfaced immediately and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("cannot turn {from} node at {pos} into {to}")]
    InvalidTransition { pos: Point, from: Role, to: Role },

    #[error("{0} is outside the grid")]
    OutOfBounds(Point),

    #[error("{0} already holds a terminal")]
    Duplicate(Point),

    #[error("all terminals are already placed")]
    LayoutComplete,

    #[error("invalid session configuration: {0}")]
    Config(String),
}

/// Shorthand result type for grid operations.
pub type GraphResult<T> = Result<T, GraphError>;
