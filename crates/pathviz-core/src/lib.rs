//! **pathviz-core** — grid model for shortest-path visualization.
//!
//! This crate provides the topology a search runs over: `(row, col)`
//! positions, cells with wall/start/finish roles, and a fixed-size [`Grid`]
//! that can be built empty, generated from an obstacle probability, or
//! parsed from an ASCII layout. It has no search logic of its own.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
mod mapgen;

pub use cell::Cell;
pub use error::{GridError, Role};
pub use geom::{Pos, Range, RangeIter};
pub use grid::Grid;
