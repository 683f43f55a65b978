//! Structural errors raised while building or querying a [`Grid`](crate::Grid).

use std::fmt;

use crate::geom::Pos;

/// Which of the two fixed roles an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Start,
    Finish,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Finish => f.write_str("finish"),
        }
    }
}

/// Errors reported by grid construction and coordinate lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A coordinate lies outside `[0, rows) × [0, cols)`.
    OutOfRange { pos: Pos, rows: i32, cols: i32 },
    /// No cell carries the given role.
    NoStartOrFinish(Role),
    /// More than one cell carries the given role.
    DuplicateRole { role: Role, pos: Pos },
    /// Rows or columns are not positive.
    InvalidSize { rows: i32, cols: i32 },
    /// Obstacle probability is not inside `[0, 1]`.
    InvalidProbability(f64),
    /// Start and finish share a coordinate.
    StartIsFinish(Pos),
    /// The start cell cannot become a wall.
    RoleIsWall { role: Role, pos: Pos },
    /// A stored cell disagrees with the grid's size, walls or roles.
    CellMismatch(Pos),
    /// Layout lines have different widths.
    InconsistentSize { line: usize, expected: usize, found: usize },
    /// Layout contains a character outside `S F # .`.
    InvalidRune { ch: char, pos: Pos },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, rows, cols } => {
                write!(f, "position {pos} is outside the {rows}x{cols} grid")
            }
            Self::NoStartOrFinish(role) => write!(f, "grid has no {role} cell"),
            Self::DuplicateRole { role, pos } => {
                write!(f, "grid has a second {role} cell at {pos}")
            }
            Self::InvalidSize { rows, cols } => {
                write!(f, "invalid grid size {rows}x{cols}")
            }
            Self::InvalidProbability(p) => {
                write!(f, "obstacle probability {p} is not in [0, 1]")
            }
            Self::StartIsFinish(pos) => write!(f, "start and finish are both at {pos}"),
            Self::CellMismatch(pos) => write!(f, "cell at {pos} does not match the grid"),
            Self::RoleIsWall { role, pos } => write!(f, "{role} cell at {pos} cannot be a wall"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
