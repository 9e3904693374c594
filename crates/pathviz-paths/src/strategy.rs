//! The catalogue of interchangeable search strategies.

use std::fmt;
use std::str::FromStr;

use pathviz_core::Point;
use thiserror::Error;

use crate::error::SearchError;
use crate::event::Observer;
use crate::traits::HeuristicPather;
use crate::tree::Tree;
use crate::{astar, bfs, bidirectional, dfs, greedy};

/// One of the five traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Bfs,
    Bidirectional,
    Dfs,
    Greedy,
    Astar,
}

impl Strategy {
    /// All strategies, in menu order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Bidirectional,
        Strategy::Dfs,
        Strategy::Greedy,
        Strategy::Astar,
    ];

    /// Human-readable menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "Single-Point BFS",
            Strategy::Bidirectional => "Bidirectional BFS",
            Strategy::Dfs => "DFS Search",
            Strategy::Greedy => "Greedy Best-First",
            Strategy::Astar => "A* Search",
        }
    }

    /// Short name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Bidirectional => "bidir",
            Strategy::Dfs => "dfs",
            Strategy::Greedy => "greedy",
            Strategy::Astar => "astar",
        }
    }

    /// Whether the strategy always returns a shortest path on a unit-cost
    /// grid.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Strategy::Bfs | Strategy::Astar)
    }

    /// Run this strategy from `source` to `goal`.
    pub fn search<P: HeuristicPather, O: Observer>(
        self,
        pather: &P,
        source: Point,
        goal: Point,
        obs: &mut O,
    ) -> Result<Tree, SearchError> {
        match self {
            Strategy::Bfs => bfs(pather, source, goal, obs),
            Strategy::Bidirectional => bidirectional(pather, source, goal, obs),
            Strategy::Dfs => dfs(pather, source, goal, obs),
            Strategy::Greedy => greedy(pather, source, goal, obs),
            Strategy::Astar => astar(pather, source, goal, obs),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy {0:?} (expected bfs, bidir, dfs, greedy, astar or 1-5)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Accepts the short names, a few aliases, and the 1-based menu index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let found = match lower.as_str() {
            "bfs" | "1" => Strategy::Bfs,
            "bidir" | "bidirectional" | "2" => Strategy::Bidirectional,
            "dfs" | "3" => Strategy::Dfs,
            "greedy" | "best-first" | "4" => Strategy::Greedy,
            "astar" | "a*" | "5" => Strategy::Astar,
            _ => return Err(ParseStrategyError(s.to_string())),
        };
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_indices() {
        for (i, s) in Strategy::ALL.iter().enumerate() {
            assert_eq!(s.name().parse::<Strategy>(), Ok(*s));
            assert_eq!((i + 1).to_string().parse::<Strategy>(), Ok(*s));
        }
        assert_eq!("A*".parse::<Strategy>(), Ok(Strategy::Astar));
        assert!("dijkstra".parse::<Strategy>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(Strategy::Greedy.to_string(), "Greedy Best-First");
        assert!(Strategy::Astar.is_optimal());
        assert!(!Strategy::Dfs.is_optimal());
    }
}
