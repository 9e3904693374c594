//! Terminal placement for one design session.
//!
//! A [`Layout`] owns the session's [`GridGraph`] and walks through the
//! placement sequence: the Source first, then K Stops in order, then the
//! End. Once every terminal is placed, further placements paint obstacles.

use crate::config::SessionConfig;
use crate::error::{GraphError, GraphResult};
use crate::geom::Point;
use crate::grid::GridGraph;
use crate::role::Role;

/// Which terminal the next [`Layout::place`] call assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Source,
    /// Zero-based index of the next stop.
    Stop(usize),
    End,
    /// All terminals placed; `place` paints obstacles.
    Ready,
}

/// A session: grid, terminal count and the ordered terminals placed so far.
#[derive(Debug, Clone)]
pub struct Layout {
    graph: GridGraph,
    wanted_stops: usize,
    source: Option<Point>,
    stops: Vec<Point>,
    end: Option<Point>,
}

impl Layout {
    /// Start a session on a fresh grid.
    pub fn new(config: &SessionConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            graph: GridGraph::new(config.size),
            wanted_stops: config.stops,
            source: None,
            stops: Vec::with_capacity(config.stops),
            end: None,
        })
    }

    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    /// Mutable access for obstacle edits and maze generation. Terminal
    /// invariants are still enforced by [`GridGraph::set_role`].
    pub fn graph_mut(&mut self) -> &mut GridGraph {
        &mut self.graph
    }

    pub fn stop_count(&self) -> usize {
        self.wanted_stops
    }

    pub fn source(&self) -> Option<Point> {
        self.source
    }

    pub fn stops(&self) -> &[Point] {
        &self.stops
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn phase(&self) -> Phase {
        if self.source.is_none() {
            Phase::Source
        } else if self.stops.len() < self.wanted_stops {
            Phase::Stop(self.stops.len())
        } else if self.end.is_none() {
            Phase::End
        } else {
            Phase::Ready
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == Phase::Ready
    }

    /// Place the next terminal at `p`, or paint an obstacle once the layout
    /// is complete. Returns the role `p` now holds.
    pub fn place(&mut self, p: Point) -> GraphResult<Role> {
        let phase = self.phase();
        if phase == Phase::Ready {
            self.paint_obstacle(p)?;
            return Ok(Role::Obstacle);
        }
        if self.graph.is_terminal(p) {
            return Err(GraphError::Duplicate(p));
        }
        let role = match phase {
            Phase::Source => Role::Source,
            Phase::Stop(_) => Role::Stop,
            _ => Role::End,
        };
        self.graph.set_role(p, role)?;
        match role {
            Role::Source => self.source = Some(p),
            Role::Stop => self.stops.push(p),
            _ => self.end = Some(p),
        }
        Ok(role)
    }

    /// Place every terminal at once: source, stops in order, end.
    pub fn place_all(&mut self, source: Point, stops: &[Point], end: Point) -> GraphResult<()> {
        if stops.len() != self.wanted_stops {
            return Err(GraphError::Config(format!(
                "expected {} stops, got {}",
                self.wanted_stops,
                stops.len()
            )));
        }
        if self.phase() != Phase::Source {
            return Err(GraphError::LayoutComplete);
        }
        self.place(source)?;
        for &s in stops {
            self.place(s)?;
        }
        self.place(end)?;
        Ok(())
    }

    /// Make `p` an Obstacle. Returns whether the node changed.
    pub fn paint_obstacle(&mut self, p: Point) -> GraphResult<bool> {
        match self.graph.role(p) {
            None => Err(GraphError::OutOfBounds(p)),
            Some(r) if r.is_terminal() => Err(GraphError::InvalidTransition {
                pos: p,
                from: r,
                to: Role::Obstacle,
            }),
            Some(_) => Ok(self.graph.wall(p)),
        }
    }

    /// Clear an Obstacle at `p`. Returns whether the node changed.
    pub fn erase(&mut self, p: Point) -> GraphResult<bool> {
        if !self.graph.contains(p) {
            return Err(GraphError::OutOfBounds(p));
        }
        Ok(self.graph.unwall(p))
    }

    /// The route endpoints `[source, stops…, end]`, once complete.
    pub fn waypoints(&self) -> Option<Vec<Point>> {
        let (source, end) = (self.source?, self.end?);
        if self.stops.len() != self.wanted_stops {
            return None;
        }
        let mut pts = Vec::with_capacity(self.stops.len() + 2);
        pts.push(source);
        pts.extend_from_slice(&self.stops);
        pts.push(end);
        Some(pts)
    }

    /// Full session reset: fresh grid, no terminals.
    pub fn reset(&mut self) {
        self.graph.reset();
        self.source = None;
        self.stops.clear();
        self.end = None;
    }
}
