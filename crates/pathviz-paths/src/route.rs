//! Chaining two-endpoint searches through ordered waypoints.

use pathviz_core::Point;
use thiserror::Error;

use crate::error::{PathError, SearchError};
use crate::event::Observer;
use crate::strategy::Strategy;
use crate::traits::HeuristicPather;
use crate::tree::Path;

/// Why a route could not be completed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("a route needs at least two waypoints, got {0}")]
    Incomplete(usize),

    #[error("leg {leg}: {source}")]
    Search {
        leg: usize,
        #[source]
        source: SearchError,
    },

    #[error("leg {leg}: {source}")]
    Path {
        leg: usize,
        #[source]
        source: PathError,
    },
}

impl RouteError {
    /// The underlying search failure, if that is what ended the route.
    pub fn search_error(&self) -> Option<SearchError> {
        match self {
            RouteError::Search { source, .. } => Some(*source),
            _ => None,
        }
    }
}

/// Per-leg paths of a completed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    legs: Vec<Path>,
}

impl Route {
    pub fn legs(&self) -> &[Path] {
        &self.legs
    }

    /// All legs joined into one path; each waypoint appears once.
    pub fn combined(&self) -> Path {
        let mut legs = self.legs.iter();
        let Some(first) = legs.next() else {
            unreachable!("a route always has at least one leg");
        };
        let mut path = first.clone();
        for leg in legs {
            path.extend_with(leg);
        }
        path
    }

    /// Total number of moves across all legs.
    pub fn edges(&self) -> usize {
        self.legs.iter().map(Path::edges).sum()
    }
}

/// Run `strategy` over every consecutive pair of `waypoints`.
///
/// `obs.begin_leg` is called before each leg. The first leg that fails ends
/// the route; later legs are not searched and no partial route is returned.
pub fn route<P: HeuristicPather, O: Observer>(
    pather: &P,
    strategy: Strategy,
    waypoints: &[Point],
    obs: &mut O,
) -> Result<Route, RouteError> {
    if waypoints.len() < 2 {
        return Err(RouteError::Incomplete(waypoints.len()));
    }
    let mut legs = Vec::with_capacity(waypoints.len() - 1);
    for (leg, pair) in waypoints.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        log::trace!("{} leg {leg}: {from} -> {to}", strategy.name());
        obs.begin_leg(leg, from, to);
        let tree = strategy
            .search(pather, from, to, obs)
            .map_err(|source| RouteError::Search { leg, source })?;
        let path = tree
            .path()
            .map_err(|source| RouteError::Path { leg, source })?;
        legs.push(path);
    }
    Ok(Route { legs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::GridGraph;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[derive(Default)]
    struct Legs(Vec<(usize, Point, Point)>, usize);

    impl Observer for Legs {
        fn on_event(&mut self, _event: crate::VisitEvent) {
            self.1 += 1;
        }

        fn begin_leg(&mut self, leg: usize, from: Point, to: Point) {
            self.0.push((leg, from, to));
        }
    }

    #[test]
    fn chains_through_stops() {
        let g = GridGraph::new(5);
        let pts = [p(0, 0), p(0, 4), p(4, 4), p(4, 0)];
        let mut obs = Legs::default();
        let r = route(&g, Strategy::Bfs, &pts, &mut obs).unwrap();
        assert_eq!(r.legs().len(), 3);
        assert_eq!(r.edges(), 12);
        let all = r.combined();
        assert_eq!(all.len(), 13);
        assert_eq!(all.first(), p(0, 0));
        assert_eq!(all.last(), p(4, 0));
        assert_eq!(
            obs.0,
            vec![(0, p(0, 0), p(0, 4)), (1, p(0, 4), p(4, 4)), (2, p(4, 4), p(4, 0))]
        );
        assert!(obs.1 > 0);
    }

    #[test]
    fn stops_at_first_failing_leg() {
        let g = GridGraph::from_rows(&["S.o", "###", "..E"]).unwrap();
        let mut obs = Legs::default();
        let err = route(&g, Strategy::Astar, &[p(0, 0), p(0, 2), p(2, 2)], &mut obs).unwrap_err();
        assert_eq!(
            err,
            RouteError::Search {
                leg: 1,
                source: SearchError::NoPathFound
            }
        );
        assert_eq!(err.search_error(), Some(SearchError::NoPathFound));
        assert_eq!(obs.0.len(), 2);
    }

    #[test]
    fn needs_two_waypoints() {
        let g = GridGraph::new(2);
        assert_eq!(
            route(&g, Strategy::Dfs, &[p(0, 0)], &mut ()),
            Err(RouteError::Incomplete(1))
        );
    }
}
