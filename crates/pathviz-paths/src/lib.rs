//! Step-by-step search strategies for pathviz grids.
//!
//! Five interchangeable two-endpoint strategies share one contract: they
//! read a [`Pather`], report every node transition to an [`Observer`] as a
//! [`VisitEvent`], poll it for cancellation once per frontier pop, and
//! return a [`Tree`] from which the [`Path`] is rebuilt.
//!
//! - **BFS** ([`bfs`]): FIFO frontier, shortest path
//! - **Bidirectional BFS** ([`bidirectional`]): two alternating FIFO frontiers
//! - **DFS** ([`dfs`]): LIFO frontier, no optimality guarantee
//! - **Greedy best-first** ([`greedy`]): heuristic-only priority
//! - **A\*** ([`astar`]): `g + h` priority, shortest path
//!
//! Stops between source and end are handled by [`route`], which chains one
//! search per leg. [`Overlay`] turns the event stream into per-node trace
//! tags for a renderer.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, bidirectional BFS, DFS |
//! | [`HeuristicPather`] : [`Pather`] | greedy best-first, A*, [`Strategy`] dispatch |

mod astar;
mod bfs;
mod bidir;
mod dfs;
mod distance;
mod error;
mod event;
mod frontier;
mod greedy;
mod overlay;
mod route;
mod strategy;
mod traits;
mod tree;

pub use astar::astar;
pub use bfs::bfs;
pub use bidir::bidirectional;
pub use dfs::dfs;
pub use distance::manhattan;
pub use error::{PathError, SearchError};
pub use event::{Abortable, Observer, Recorder, Side, VisitEvent};
pub use frontier::RankedQueue;
pub use greedy::greedy;
pub use overlay::{Overlay, Tag};
pub use route::{Route, RouteError, route};
pub use strategy::{ParseStrategyError, Strategy};
pub use traits::{HeuristicPather, Pather};
pub use tree::{ParentMap, Path, Tree, reconstruct};
