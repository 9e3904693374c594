use std::collections::{HashSet, VecDeque};

use pathviz_core::Point;

use crate::error::SearchError;
use crate::event::{Observer, VisitEvent};
use crate::frontier::Frontier;
use crate::traits::Pather;
use crate::tree::{ParentMap, Tree};

/// Breadth-first search from `source` to `goal`.
///
/// Nodes are marked visited the moment they are enqueued, so each node
/// enters the FIFO frontier at most once. The search stops as soon as
/// `goal` is dequeued, and the resulting path is shortest in edge count.
///
/// Emits `Enqueued` for each newly discovered neighbour, then `Settled` for
/// the node being expanded.
pub fn bfs<P: Pather, O: Observer>(
    pather: &P,
    source: Point,
    goal: Point,
    obs: &mut O,
) -> Result<Tree, SearchError> {
    sweep(pather, source, goal, VecDeque::new(), |_| 0, obs, "bfs")
}

/// Shared loop for searches that never revisit a node: BFS, DFS and greedy
/// best-first differ only in their frontier and rank function.
pub(crate) fn sweep<P, F, O>(
    pather: &P,
    source: Point,
    goal: Point,
    mut frontier: F,
    rank: impl Fn(Point) -> i32,
    obs: &mut O,
    name: &'static str,
) -> Result<Tree, SearchError>
where
    P: Pather,
    F: Frontier,
    O: Observer,
{
    let mut parents = ParentMap::new();
    let mut visited = HashSet::from([source]);
    frontier.push(source, rank(source));

    let mut nbuf = Vec::with_capacity(4);
    let mut settled = 0usize;

    loop {
        if obs.should_abort() {
            log::debug!("{name} {source} -> {goal}: aborted after {settled} settled");
            return Err(SearchError::Aborted);
        }
        let Some(current) = frontier.pop() else {
            break;
        };
        if current == goal {
            log::debug!(
                "{name} {source} -> {goal}: reached after {settled} settled, {} discovered",
                visited.len()
            );
            return Ok(Tree::Single {
                source,
                goal,
                parents,
            });
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &n in nbuf.iter() {
            if visited.insert(n) {
                parents.insert(n, current);
                frontier.push(n, rank(n));
                obs.on_event(VisitEvent::enqueued(n));
            }
        }
        obs.on_event(VisitEvent::settled(current));
        settled += 1;
    }

    log::debug!("{name} {source} -> {goal}: no path after {settled} settled");
    Err(SearchError::NoPathFound)
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
    fn open_grid_shortest() {
        let g = GridGraph::new(5);
        let tree = bfs(&g, p(0, 0), p(4, 4), &mut ()).unwrap();
        let path = tree.path().unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), p(0, 0));
        assert_eq!(path.last(), p(4, 4));
    }

    #[test]
    fn first_expansion_events() {
        let g = GridGraph::new(3);
        let mut rec = Recorder::new();
        bfs(&g, p(0, 0), p(2, 2), &mut rec).unwrap();
        assert_eq!(
            &rec.events[..3],
            &[
                VisitEvent::enqueued(p(0, 1)),
                VisitEvent::enqueued(p(1, 0)),
                VisitEvent::settled(p(0, 0)),
            ]
        );
        // Every other node is settled before the goal is dequeued.
        assert_eq!(rec.settled(), 8);
        assert_eq!(rec.enqueued(), 8);
    }

    #[test]
    fn prefers_east_on_ties() {
        let g = GridGraph::new(2);
        let path = bfs(&g, p(0, 0), p(1, 1), &mut ()).unwrap().path().unwrap();
        assert_eq!(path.points(), &[p(0, 0), p(0, 1), p(1, 1)]);
    }

    #[test]
    fn goes_around_walls() {
        let g = GridGraph::from_rows(&["S.#..", "..#..", "..#..", ".....", "....E"]).unwrap();
        let path = bfs(&g, p(0, 0), p(4, 4), &mut ()).unwrap().path().unwrap();
        assert_eq!(path.len(), 9);
        assert!(path.iter().all(|&q| g.is_passable(q)));
    }

    #[test]
    fn walled_off_goal() {
        let g = GridGraph::from_rows(&["S..", "###", "..E"]).unwrap();
        assert_eq!(
            bfs(&g, p(0, 0), p(2, 2), &mut ()),
            Err(SearchError::NoPathFound)
        );
    }

    #[test]
    fn abort_before_first_pop() {
        let g = GridGraph::new(3);
        let mut obs = crate::event::Abortable::new(Recorder::new(), || true);
        assert_eq!(bfs(&g, p(0, 0), p(2, 2), &mut obs), Err(SearchError::Aborted));
        assert!(obs.into_inner().events.is_empty());
    }

    #[test]
    fn abort_midway() {
        let g = GridGraph::new(10);
        let mut pops = 0;
        let mut obs = crate::event::Abortable::new(Recorder::new(), || {
            pops += 1;
            pops > 3
        });
        assert_eq!(bfs(&g, p(0, 0), p(9, 9), &mut obs), Err(SearchError::Aborted));
        assert_eq!(obs.into_inner().settled(), 3);
    }
}
