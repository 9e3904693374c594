//! Recursive-division maze generation.
//!
//! The grid is first cleared and ringed with an outer wall. The area inside
//! the ring is then split by a wall line containing a single passage, and
//! each half is split again with the opposite orientation, until a region
//! is less than 3 cells wide or tall. Wall lines sit at odd offsets inside
//! their region and passages at even offsets along the line; the RNG only
//! picks among those offsets. Terminal nodes are never walled.

use pathviz_core::{GridGraph, Point, Range};
use pathviz_paths::{Observer, VisitEvent};
use rand::{Rng, RngExt};

use crate::error::MazeError;

/// Direction of a dividing wall line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The wall is a row; it splits the region into a top and bottom half.
    Horizontal,
    /// The wall is a column; it splits the region into a left and right half.
    Vertical,
}

impl Orientation {
    pub fn flip(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Initial cut for a region: horizontal when it is taller than wide.
    pub fn for_region(r: Range) -> Self {
        if r.rows() > r.cols() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Obstacle generator driven by an RNG.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator around `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Replace every non-terminal node of `graph` with a recursive-division
    /// maze.
    ///
    /// Returns the number of walls placed. `obs` receives one `Enqueued`
    /// event per wall, in placement order, and is polled for cancellation
    /// before each division.
    pub fn generate<O: Observer>(
        &mut self,
        graph: &mut GridGraph,
        obs: &mut O,
    ) -> Result<usize, MazeError> {
        graph.reset_non_terminal();
        let bounds = graph.bounds();
        let mut walls = 0;

        for p in bounds.iter().filter(|&p| bounds.on_border(p)) {
            if graph.wall(p) {
                obs.on_event(VisitEvent::enqueued(p));
                walls += 1;
            }
        }

        let inner = Range::with_size(Point::new(1, 1), graph.size() - 2, graph.size() - 2);
        if !inner.is_empty() {
            let orientation = Orientation::for_region(inner);
            self.divide(graph, inner, orientation, obs, &mut walls)?;
        }

        log::debug!("maze {0}x{0}: {walls} walls", graph.size());
        Ok(walls)
    }

    fn divide<O: Observer>(
        &mut self,
        graph: &mut GridGraph,
        region: Range,
        orientation: Orientation,
        obs: &mut O,
        walls: &mut usize,
    ) -> Result<(), MazeError> {
        let (rows, cols) = (region.rows(), region.cols());
        if rows < 3 || cols < 3 {
            return Ok(());
        }
        if obs.should_abort() {
            return Err(MazeError::Aborted);
        }
        let origin = region.min;

        let (line, first, second) = match orientation {
            Orientation::Horizontal => {
                let wall_row = origin.row + self.odd_offset(rows);
                let gap_col = origin.col + self.even_offset(cols);
                let line: Vec<Point> = (region.min.col..region.max.col)
                    .filter(|&c| c != gap_col)
                    .map(|c| Point::new(wall_row, c))
                    .collect();
                let top = Range::with_size(origin, wall_row - origin.row, cols);
                let bottom = Range::with_size(
                    Point::new(wall_row + 1, origin.col),
                    region.max.row - wall_row - 1,
                    cols,
                );
                (line, top, bottom)
            }
            Orientation::Vertical => {
                let wall_col = origin.col + self.odd_offset(cols);
                let gap_row = origin.row + self.even_offset(rows);
                let line: Vec<Point> = (region.min.row..region.max.row)
                    .filter(|&r| r != gap_row)
                    .map(|r| Point::new(r, wall_col))
                    .collect();
                let left = Range::with_size(origin, rows, wall_col - origin.col);
                let right = Range::with_size(
                    Point::new(origin.row, wall_col + 1),
                    rows,
                    region.max.col - wall_col - 1,
                );
                (line, left, right)
            }
        };

        for p in line {
            if graph.wall(p) {
                obs.on_event(VisitEvent::enqueued(p));
                *walls += 1;
            }
        }

        let next = orientation.flip();
        self.divide(graph, first, next, obs, walls)?;
        self.divide(graph, second, next, obs, walls)
    }

    /// Uniform pick from `1, 3, 5, … < extent - 1`.
    fn odd_offset(&mut self, extent: i32) -> i32 {
        1 + 2 * self.rng.random_range(0..(extent - 1) / 2)
    }

    /// Uniform pick from `0, 2, 4, … < extent`.
    fn even_offset(&mut self, extent: i32) -> i32 {
        2 * self.rng.random_range(0..(extent + 1) / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Role;
    use pathviz_paths::{Abortable, Recorder};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn maze_gen(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn offsets_stay_in_range() {
        let mut mg = maze_gen(1);
        for extent in 3..20 {
            for _ in 0..50 {
                let o = mg.odd_offset(extent);
                assert!(o % 2 == 1 && o < extent - 1, "odd {o} for {extent}");
                let e = mg.even_offset(extent);
                assert!(e % 2 == 0 && e < extent, "even {e} for {extent}");
            }
        }
    }

    #[test]
    fn border_is_walled() {
        let mut g = GridGraph::new(9);
        maze_gen(3).generate(&mut g, &mut ()).unwrap();
        for p in g.bounds().iter().filter(|&p| g.bounds().on_border(p)) {
            assert_eq!(g.role(p), Some(Role::Obstacle), "{p}");
        }
    }

    #[test]
    fn tiny_grids_only_get_a_border() {
        let mut g = GridGraph::new(4);
        let walls = maze_gen(0).generate(&mut g, &mut ()).unwrap();
        assert_eq!(walls, 12);
        assert_eq!(g.count(Role::Free), 4);
    }

    #[test]
    fn events_match_walls() {
        let mut g = GridGraph::new(15);
        let mut rec = Recorder::new();
        let walls = maze_gen(11).generate(&mut g, &mut rec).unwrap();
        assert_eq!(rec.events.len(), walls);
        assert_eq!(g.count(Role::Obstacle), walls);
        assert!(rec.events.iter().all(|e| e.is_enqueued()));
    }

    #[test]
    fn terminals_are_skipped() {
        let mut g = GridGraph::new(11);
        g.set_role(Point::new(0, 0), Role::Source).unwrap();
        g.set_role(Point::new(10, 10), Role::End).unwrap();
        g.set_role(Point::new(5, 5), Role::Stop).unwrap();
        maze_gen(5).generate(&mut g, &mut ()).unwrap();
        assert_eq!(g.role(Point::new(0, 0)), Some(Role::Source));
        assert_eq!(g.role(Point::new(10, 10)), Some(Role::End));
        assert_eq!(g.role(Point::new(5, 5)), Some(Role::Stop));
    }

    #[test]
    fn degenerate_sizes() {
        for (n, expected) in [(1, 1), (2, 4), (3, 8)] {
            let mut g = GridGraph::new(n);
            let walls = maze_gen(0).generate(&mut g, &mut ()).unwrap();
            assert_eq!(walls, expected, "size {n}");
        }
    }

    #[test]
    fn clears_previous_obstacles() {
        let mut g = GridGraph::new(7);
        g.set_role(Point::new(1, 1), Role::Obstacle).unwrap();
        g.set_role(Point::new(1, 2), Role::Obstacle).unwrap();
        let walls = maze_gen(9).generate(&mut g, &mut ()).unwrap();
        assert_eq!(g.count(Role::Obstacle), walls);
    }

    #[test]
    fn abort_stops_division() {
        let mut g = GridGraph::new(21);
        let mut obs = Abortable::new(Recorder::new(), || true);
        assert_eq!(
            maze_gen(2).generate(&mut g, &mut obs),
            Err(MazeError::Aborted)
        );
        // Only the outer ring was placed.
        assert_eq!(obs.into_inner().events.len(), 80);
    }

    #[test]
    fn first_cut_of_square_is_vertical() {
        assert_eq!(Orientation::for_region(Range::new(0, 0, 5, 5)), Orientation::Vertical);
        assert_eq!(Orientation::for_region(Range::new(0, 0, 6, 5)), Orientation::Horizontal);
        assert_eq!(Orientation::Vertical.flip(), Orientation::Horizontal);
    }
}
