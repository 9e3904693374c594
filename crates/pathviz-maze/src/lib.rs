//! Obstacle layouts for pathviz grids: recursive-division mazes and random
//! obstacle fields.
//!
//! Both generators take a caller-supplied RNG, so a fixed seed reproduces
//! the exact layout and event stream, and both report every new wall to an
//! [`Observer`](pathviz_paths::Observer) as an `Enqueued` event.

pub mod error;
pub mod maze;
pub mod scatter;

pub use error::MazeError;
pub use maze::{MazeGen, Orientation};
pub use scatter::DEFAULT_DENSITY;
