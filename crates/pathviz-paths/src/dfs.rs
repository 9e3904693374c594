use pathviz_core::Point;

use crate::bfs::sweep;
use crate::error::SearchError;
use crate::event::Observer;
use crate::traits::Pather;
use crate::tree::Tree;

/// Depth-first search from `source` to `goal` with a LIFO frontier.
///
/// Nodes are marked visited when pushed. Neighbours are pushed in the
/// pather's order, so the last neighbour pushed is expanded first. The path
/// found is generally not the shortest.
pub fn dfs<P: Pather, O: Observer>(
    pather: &P,
    source: Point,
    goal: Point,
    obs: &mut O,
) -> Result<Tree, SearchError> {
    sweep(pather, source, goal, Vec::new(), |_| 0, obs, "dfs")
}
