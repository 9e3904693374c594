use pathviz_core::Point;

use crate::bfs::sweep;
use crate::error::SearchError;
use crate::event::Observer;
use crate::frontier::RankedQueue;
use crate::traits::HeuristicPather;
use crate::tree::Tree;

/// Greedy best-first search from `source` to `goal`.
///
/// The frontier is ordered by the heuristic alone (no path-cost term), with
/// ties broken by insertion order. Nodes are marked visited on insertion and
/// never re-opened, so the path is not guaranteed to be optimal.
pub fn greedy<P: HeuristicPather, O: Observer>(
    pather: &P,
    source: Point,
    goal: Point,
    obs: &mut O,
) -> Result<Tree, SearchError> {
    sweep(
        pather,
        source,
        goal,
        RankedQueue::new(),
        |p| pather.estimate(p, goal),
        obs,
        "greedy",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Recorder;
    use pathviz_core::GridGraph;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn beelines_on_open_grid() {
        let g = GridGraph::new(6);
        let mut rec = Recorder::new();
        let path = greedy(&g, p(0, 0), p(5, 5), &mut rec)
            .unwrap()
            .path()
            .unwrap();
        assert_eq!(path.len(), 11);
        // Only nodes on the path are expanded.
        assert_eq!(rec.settled(), 10);
    }

    #[test]
    fn ties_follow_insertion_order() {
        // From (0,0) both (0,1) and (1,0) are 1 step closer; East is inserted
        // first and wins.
        let g = GridGraph::new(2);
        let path = greedy(&g, p(0, 0), p(1, 1), &mut ()).unwrap().path().unwrap();
        assert_eq!(path.points(), &[p(0, 0), p(0, 1), p(1, 1)]);
    }

    #[test]
    fn explores_dead_end_pocket() {
        // The heuristic pulls the search into the pocket right of the source
        // before it backs out around the wall.
        let g = GridGraph::from_rows(&[
            ".......",
            ".#####.",
            ".S...#.",
            ".#####.",
            ".......",
            "...E...",
            ".......",
        ])
        .unwrap();
        let mut rec = Recorder::new();
        let path = greedy(&g, p(2, 1), p(5, 3), &mut rec)
            .unwrap()
            .path()
            .unwrap();
        assert!(rec.events.contains(&crate::VisitEvent::settled(p(2, 4))));
        assert_eq!(path.edges(), 7);
        assert_eq!(path.last(), p(5, 3));
    }
}
