use std::collections::{HashSet, VecDeque};

use pathviz_core::Point;

use crate::error::SearchError;
use crate::event::{Observer, Side, VisitEvent};
use crate::traits::Pather;
use crate::tree::{ParentMap, Tree};

/// One half of a bidirectional search.
struct Wave {
    side: Side,
    queue: VecDeque<Point>,
    visited: HashSet<Point>,
    parents: ParentMap,
}

impl Wave {
    fn new(root: Point, side: Side) -> Self {
        Self {
            side,
            queue: VecDeque::from([root]),
            visited: HashSet::from([root]),
            parents: ParentMap::new(),
        }
    }

    fn expand<P: Pather, O: Observer>(
        &mut self,
        pather: &P,
        current: Point,
        nbuf: &mut Vec<Point>,
        obs: &mut O,
    ) {
        nbuf.clear();
        pather.neighbors(current, nbuf);
        for &n in nbuf.iter() {
            if self.visited.insert(n) {
                self.parents.insert(n, current);
                self.queue.push_back(n);
                obs.on_event(VisitEvent::Enqueued {
                    pos: n,
                    side: self.side,
                });
            }
        }
    }
}

/// Bidirectional breadth-first search.
///
/// Two FIFO frontiers grow from `source` and from `goal` in strict
/// alternation: one pop from the source side, then one pop from the goal
/// side. The first node popped on either side that the other side has
/// already visited becomes the meeting node. Both pops of an iteration are
/// reported `Settled` at the end of that iteration.
///
/// The path is shortest or near-shortest; among equal-length alternatives
/// the alternation order decides which meeting node is found.
pub fn bidirectional<P: Pather, O: Observer>(
    pather: &P,
    source: Point,
    goal: Point,
    obs: &mut O,
) -> Result<Tree, SearchError> {
    let mut fwd = Wave::new(source, Side::Forward);
    let mut bwd = Wave::new(goal, Side::Backward);
    let mut nbuf = Vec::with_capacity(4);
    let mut iterations = 0usize;

    let meeting = loop {
        if fwd.queue.is_empty() || bwd.queue.is_empty() {
            log::debug!("bidir {source} -> {goal}: no path after {iterations} iterations");
            return Err(SearchError::NoPathFound);
        }

        if obs.should_abort() {
            log::debug!("bidir {source} -> {goal}: aborted after {iterations} iterations");
            return Err(SearchError::Aborted);
        }
        let Some(from_source) = fwd.queue.pop_front() else {
            return Err(SearchError::NoPathFound);
        };
        if bwd.visited.contains(&from_source) {
            break from_source;
        }
        fwd.expand(pather, from_source, &mut nbuf, obs);

        if obs.should_abort() {
            log::debug!("bidir {source} -> {goal}: aborted after {iterations} iterations");
            return Err(SearchError::Aborted);
        }
        let Some(from_goal) = bwd.queue.pop_front() else {
            return Err(SearchError::NoPathFound);
        };
        if fwd.visited.contains(&from_goal) {
            break from_goal;
        }
        bwd.expand(pather, from_goal, &mut nbuf, obs);

        obs.on_event(VisitEvent::Settled {
            pos: from_source,
            side: Side::Forward,
        });
        obs.on_event(VisitEvent::Settled {
            pos: from_goal,
            side: Side::Backward,
        });
        iterations += 1;
    };

    log::debug!(
        "bidir {source} -> {goal}: met at {meeting} after {iterations} iterations, {} + {} discovered",
        fwd.visited.len(),
        bwd.visited.len()
    );
    Ok(Tree::Meeting {
        source,
        goal,
        meeting,
        forward: fwd.parents,
        backward: bwd.parents,
    })
}
