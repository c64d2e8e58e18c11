//! Obstacle-grid generation for search comparisons.
//!
//! [`MazeGen`] scatters walls over an open square grid and places a start
//! and an exit, producing a [`Scenario`] every search strategy can be run
//! on. Scenarios can also be built from hand-written grids with
//! [`Scenario::new`] or [`Scenario::from_markers`].

pub mod error;
pub mod mazegen;
pub mod scenario;

pub use error::GenError;
pub use mazegen::{EndpointMode, MazeGen};
pub use scenario::Scenario;
