//! Search and reconstruction failures.

use pathviz_core::Point;
use thiserror::Error;

/// Why a search ended without a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier ran dry before the goal was settled. A normal outcome.
    #[error("no path found")]
    NoPathFound,

    /// The observer asked the search to stop.
    #[error("search aborted")]
    Aborted,
}

/// A path that cannot be built: a parent map that does not lead back to
/// its root, or an empty node list.
///
/// A correct search never produces either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("parent chain broken at {at} after {steps} steps")]
    Broken { at: Point, steps: usize },

    /// A path was built from an empty node list.
    #[error("a path needs at least one node")]
    Empty,
}
