use std::fmt;

use pathviz_core::{GridError, Pos};

/// Reasons a search refuses to start.
///
/// An unreachable finish is not an error: the search completes with
/// `reached == false`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Start or finish is not a valid cell of the grid.
    Grid(GridError),
    /// The start cell is a wall.
    StartIsWall(Pos),
    /// Start and finish are the same cell.
    StartIsFinish(Pos),
    /// The search state was built for a grid of another size.
    SizeMismatch { state: usize, grid: usize },
    /// The search state still holds results from a previous run.
    StateNotReset,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "search: {e}"),
            Self::StartIsWall(p) => write!(f, "search: start {p} is a wall"),
            Self::StartIsFinish(p) => write!(f, "search: start and finish are both {p}"),
            Self::SizeMismatch { state, grid } => write!(
                f,
                "search: state sized for {state} cells used on a grid of {grid} cells"
            ),
            Self::StateNotReset => f.write_str("search: state must be reset before reuse"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
