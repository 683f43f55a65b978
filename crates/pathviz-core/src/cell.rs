//! The [`Cell`] type — one grid position and its role.

use crate::geom::Pos;

/// A grid cell: its position, whether it blocks movement, and whether it is
/// the start or finish of the search.
///
/// Cells carry topology only. Distances, visited flags and back-links are
/// per-search data and live outside the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Pos,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_finish: bool,
}

impl Cell {
    /// An open cell with no role.
    #[inline]
    pub const fn open(pos: Pos) -> Self {
        Self {
            pos,
            is_wall: false,
            is_start: false,
            is_finish: false,
        }
    }

    /// Set the wall flag (builder).
    #[inline]
    pub const fn with_wall(mut self, is_wall: bool) -> Self {
        self.is_wall = is_wall;
        self
    }

    /// Whether the search may step onto this cell.
    #[inline]
    pub const fn is_passable(&self) -> bool {
        !self.is_wall
    }

    /// Whether the cell is the start or the finish.
    #[inline]
    pub const fn has_role(&self) -> bool {
        self.is_start || self.is_finish
    }
}
