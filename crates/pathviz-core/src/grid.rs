//! The [`GridGraph`] type: a square lattice of [`Role`]s with 4-way
//! adjacency.
//!
//! The graph is caller-owned and passed explicitly into every search or
//! generator call. Searches only ever read it.

use std::fmt;

use crate::error::{GraphError, GraphResult};
use crate::geom::{Point, Range};
use crate::role::Role;

/// Side length used when no explicit size is configured.
pub const DEFAULT_SIZE: i32 = 100;

/// An N×N grid of nodes.
///
/// Holds at most one Source and at most one End; any number of Stops may be
/// placed (the session decides how many). Terminal nodes never revert to
/// Free or Obstacle except through [`reset`](GridGraph::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    cells: Vec<Role>,
    size: i32,
    source: Option<Point>,
    end: Option<Point>,
}

impl Default for GridGraph {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl GridGraph {
    /// Create a `size`×`size` grid of Free nodes.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        Self {
            cells: vec![Role::Free; (size as usize) * (size as usize)],
            size,
            source: None,
            end: None,
        }
    }

    /// Build a grid from text rows, one character per node.
    ///
    /// `S` = Source, `o` = Stop, `E` = End, `#` = Obstacle, anything else is
    /// Free. The grid is square with side `max(rows, longest row)`; missing
    /// cells are Free.
    pub fn from_rows(rows: &[&str]) -> GraphResult<Self> {
        let side = rows
            .iter()
            .map(|r| r.chars().count())
            .chain(std::iter::once(rows.len()))
            .max()
            .unwrap_or(0);
        let mut g = Self::new(side as i32);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let role = match ch {
                    'S' => Role::Source,
                    'o' => Role::Stop,
                    'E' => Role::End,
                    '#' => Role::Obstacle,
                    _ => continue,
                };
                g.set_role(Point::new(row as i32, col as i32), role)?;
            }
        }
        Ok(g)
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The range `[0, N) × [0, N)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size, self.size)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.row as usize) * (self.size as usize) + (p.col as usize))
        } else {
            None
        }
    }

    /// Role of the node at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn role(&self, p: Point) -> Option<Role> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and not an Obstacle.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.role(p).is_some_and(Role::is_passable)
    }

    /// Whether `p` holds a Source, Stop or End.
    #[inline]
    pub fn is_terminal(&self, p: Point) -> bool {
        self.role(p).is_some_and(Role::is_terminal)
    }

    /// The Source node, if placed.
    pub fn source(&self) -> Option<Point> {
        self.source
    }

    /// The End node, if placed.
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Passable in-bounds neighbours of `p`, in East, South, West, North
    /// order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.is_passable(n))
    }

    /// Assign `role` to the node at `p`.
    ///
    /// Fails with [`GraphError::InvalidTransition`] when `p` already holds a
    /// different terminal role, or when a second Source or End would be
    /// created. Re-assigning the current role is a no-op.
    pub fn set_role(&mut self, p: Point, role: Role) -> GraphResult<()> {
        let i = self.index(p).ok_or(GraphError::OutOfBounds(p))?;
        let from = self.cells[i];
        if from == role {
            return Ok(());
        }
        let invalid = GraphError::InvalidTransition { pos: p, from, to: role };
        if from.is_terminal() {
            return Err(invalid);
        }
        match role {
            Role::Source if self.source.is_some() => return Err(invalid),
            Role::End if self.end.is_some() => return Err(invalid),
            Role::Source => self.source = Some(p),
            Role::End => self.end = Some(p),
            _ => {}
        }
        self.cells[i] = role;
        Ok(())
    }

    /// Turn `p` into an Obstacle unless it is a terminal.
    ///
    /// Returns whether the node changed. Used by the maze generator and
    /// obstacle painting, which silently skip terminals.
    pub fn wall(&mut self, p: Point) -> bool {
        match self.index(p) {
            Some(i) if self.cells[i] == Role::Free => {
                self.cells[i] = Role::Obstacle;
                true
            }
            _ => false,
        }
    }

    /// Turn an Obstacle at `p` back into Free. Returns whether it changed.
    pub fn unwall(&mut self, p: Point) -> bool {
        match self.index(p) {
            Some(i) if self.cells[i] == Role::Obstacle => {
                self.cells[i] = Role::Free;
                true
            }
            _ => false,
        }
    }

    /// Clear every non-terminal node back to Free. Terminals are untouched.
    pub fn reset_non_terminal(&mut self) {
        for c in self.cells.iter_mut() {
            if !c.is_terminal() {
                *c = Role::Free;
            }
        }
    }

    /// Full session reset: every node becomes Free, terminals included.
    pub fn reset(&mut self) {
        self.cells.fill(Role::Free);
        self.source = None;
        self.end = None;
    }

    /// Count nodes holding `role`.
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|&&c| c == role).count()
    }

    /// Row-major iterator over `(Point, Role)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Role)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1) as usize) {
            for role in row {
                write!(f, "{}", role.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_free() {
        let g = GridGraph::new(4);
        assert_eq!(g.size(), 4);
        assert_eq!(g.count(Role::Free), 16);
        assert_eq!(g.role(Point::new(3, 3)), Some(Role::Free));
        assert_eq!(g.role(Point::new(4, 0)), None);
        assert_eq!(GridGraph::default().size(), DEFAULT_SIZE);
    }

    #[test]
    fn neighbors_order_and_filtering() {
        let mut g = GridGraph::new(3);
        let c = Point::new(1, 1);
        let all: Vec<_> = g.neighbors(c).collect();
        assert_eq!(
            all,
            vec![
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(0, 1),
            ]
        );
        g.set_role(Point::new(2, 1), Role::Obstacle).unwrap();
        let some: Vec<_> = g.neighbors(c).collect();
        assert_eq!(some, vec![Point::new(1, 2), Point::new(1, 0), Point::new(0, 1)]);
        let corner: Vec<_> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn terminals_reject_obstacles() {
        let mut g = GridGraph::new(3);
        let p = Point::new(0, 0);
        g.set_role(p, Role::Source).unwrap();
        assert_eq!(
            g.set_role(p, Role::Obstacle),
            Err(GraphError::InvalidTransition {
                pos: p,
                from: Role::Source,
                to: Role::Obstacle
            })
        );
        assert!(g.set_role(p, Role::End).is_err());
        assert!(g.set_role(p, Role::Free).is_err());
        // Same role again is fine.
        assert!(g.set_role(p, Role::Source).is_ok());
        assert!(!g.wall(p));
    }

    #[test]
    fn single_source_and_end() {
        let mut g = GridGraph::new(3);
        g.set_role(Point::new(0, 0), Role::Source).unwrap();
        g.set_role(Point::new(2, 2), Role::End).unwrap();
        assert!(g.set_role(Point::new(1, 1), Role::Source).is_err());
        assert!(g.set_role(Point::new(1, 1), Role::End).is_err());
        g.set_role(Point::new(1, 1), Role::Stop).unwrap();
        g.set_role(Point::new(1, 2), Role::Stop).unwrap();
        assert_eq!(g.source(), Some(Point::new(0, 0)));
        assert_eq!(g.end(), Some(Point::new(2, 2)));
        assert_eq!(g.count(Role::Stop), 2);
    }

    #[test]
    fn out_of_bounds() {
        let mut g = GridGraph::new(2);
        assert_eq!(
            g.set_role(Point::new(2, 0), Role::Obstacle),
            Err(GraphError::OutOfBounds(Point::new(2, 0)))
        );
        assert!(!g.is_passable(Point::new(-1, 0)));
    }

    #[test]
    fn reset_non_terminal_keeps_terminals() {
        let mut g = GridGraph::from_rows(&["S#.", "#o#", "..E"]).unwrap();
        assert_eq!(g.count(Role::Obstacle), 3);
        g.reset_non_terminal();
        assert_eq!(g.count(Role::Obstacle), 0);
        assert_eq!(g.role(Point::new(0, 0)), Some(Role::Source));
        assert_eq!(g.role(Point::new(1, 1)), Some(Role::Stop));
        assert_eq!(g.role(Point::new(2, 2)), Some(Role::End));
        g.reset();
        assert_eq!(g.count(Role::Free), 9);
        assert_eq!(g.source(), None);
    }

    #[test]
    fn wall_and_unwall() {
        let mut g = GridGraph::new(2);
        let p = Point::new(1, 0);
        assert!(g.wall(p));
        assert!(!g.wall(p));
        assert!(g.unwall(p));
        assert!(!g.unwall(p));
        assert!(!g.wall(Point::new(5, 5)));
    }

    #[test]
    fn display_round_trips_rows() {
        let rows = ["S#.", ".o.", "#.E"];
        let g = GridGraph::from_rows(&rows).unwrap();
        assert_eq!(g.to_string(), "S#.\n.o.\n#.E\n");
    }
}
