use pathviz_core::{GridGraph, Point};

use crate::distance::manhattan;

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    ///
    /// The order of appended neighbors decides tie-breaking for every
    /// strategy that has no priority key, so it must be stable.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with a heuristic, required by greedy best-first and A*.
pub trait HeuristicPather: Pather {
    /// Estimate of the number of steps from `from` to `to`.
    /// Must never overestimate the true cost for A* to stay optimal.
    fn estimate(&self, from: Point, to: Point) -> i32;
}

impl Pather for GridGraph {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(GridGraph::neighbors(self, p));
    }
}

impl HeuristicPather for GridGraph {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
