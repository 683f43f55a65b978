//! pathviz: explore a random obstacle grid with Dijkstra or A* and show the
//! exploration order and the route found.

pub mod config;
pub mod render;
pub mod timeline;
pub mod visualizer;

pub use config::{Algorithm, Config, ConfigError};
pub use render::render;
pub use timeline::{Frame, FrameKind, timeline};
pub use visualizer::{Outcome, Visualizer};
