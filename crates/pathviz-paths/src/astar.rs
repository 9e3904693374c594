use std::collections::{HashMap, HashSet};

use pathviz_core::Point;

use crate::error::SearchError;
use crate::event::{Observer, VisitEvent};
use crate::frontier::RankedQueue;
use crate::traits::HeuristicPather;
use crate::tree::{ParentMap, Tree};

/// Compute the shortest path from `source` to `goal` using A*.
///
/// The frontier is ordered by `f = g + h` with FIFO tie-breaking. Whenever a
/// strictly better `g` is found for a neighbour it is re-inserted without
/// removing the old entry; stale entries are skipped silently when popped.
/// Each unit step costs 1, so with an admissible, consistent estimate the
/// path is shortest in edge count.
pub fn astar<P: HeuristicPather, O: Observer>(
    pather: &P,
    source: Point,
    goal: Point,
    obs: &mut O,
) -> Result<Tree, SearchError> {
    let mut parents = ParentMap::new();
    let mut g_score: HashMap<Point, i32> = HashMap::from([(source, 0)]);
    let mut closed: HashSet<Point> = HashSet::new();

    let mut open: RankedQueue<(Point, i32)> = RankedQueue::new();
    open.push((source, 0), pather.estimate(source, goal));

    let mut nbuf = Vec::with_capacity(4);
    let mut stale = 0usize;

    loop {
        if obs.should_abort() {
            log::debug!("astar {source} -> {goal}: aborted after {} settled", closed.len());
            return Err(SearchError::Aborted);
        }
        let Some((current, g)) = open.pop() else {
            break;
        };
        if current == goal {
            log::debug!(
                "astar {source} -> {goal}: reached at g={g} after {} settled, {stale} stale pops",
                closed.len()
            );
            return Ok(Tree::Single {
                source,
                goal,
                parents,
            });
        }

        // Skip stale entries.
        let best = g_score.get(&current).copied().unwrap_or(i32::MAX);
        if g > best || !closed.insert(current) {
            stale += 1;
            continue;
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &n in nbuf.iter() {
            let tentative = g + 1;
            if g_score.get(&n).is_some_and(|&old| tentative >= old) {
                continue;
            }
            g_score.insert(n, tentative);
            parents.insert(n, current);
            open.push((n, tentative), tentative + pather.estimate(n, goal));
            obs.on_event(VisitEvent::enqueued(n));
        }
        obs.on_event(VisitEvent::settled(current));
    }

    log::debug!("astar {source} -> {goal}: no path after {} settled", closed.len());
    Err(SearchError::NoPathFound)
}
