//! **pathviz-core**: grid model for the pathviz search visualizer.
//!
//! This crate provides the foundational types shared by the search and maze
//! crates: geometry primitives, node roles, the obstacle-aware
//! [`GridGraph`], the terminal-placement [`Layout`] session and its
//! [`SessionConfig`].

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod role;

pub use config::SessionConfig;
pub use error::{GraphError, GraphResult};
pub use geom::{Point, Range};
pub use grid::{DEFAULT_SIZE, GridGraph};
pub use layout::{Layout, Phase};
pub use role::Role;
