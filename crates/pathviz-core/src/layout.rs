//! ASCII layouts for grids.
//!
//! A layout is one line per row, every line the same width:
//!
//! ```text
//! S..#
//! .#..
//! ...F
//! ```
//!
//! `S` is the start, `F` the finish, `#` a wall and `.` an open cell.
//! Leading and trailing whitespace around the whole layout is ignored.

use std::fmt;

use crate::cell::Cell;
use crate::error::{GridError, Role};
use crate::geom::Pos;
use crate::grid::Grid;

pub const START: char = 'S';
pub const FINISH: char = 'F';
pub const WALL: char = '#';
pub const OPEN: char = '.';

impl Grid {
    /// Parse a grid from an ASCII layout.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut width = None;
        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        let mut rows = 0;

        for (r, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let found = line.chars().count();
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::InconsistentSize {
                        line: r,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            for (c, ch) in line.chars().enumerate() {
                let p = Pos::new(r as i32, c as i32);
                match ch {
                    START => set_role(&mut start, Role::Start, p)?,
                    FINISH => set_role(&mut finish, Role::Finish, p)?,
                    WALL => walls.push(p),
                    OPEN => {}
                    _ => return Err(GridError::InvalidRune { ch, pos: p }),
                }
            }
            rows += 1;
        }

        let start = start.ok_or(GridError::NoStartOrFinish(Role::Start))?;
        let finish = finish.ok_or(GridError::NoStartOrFinish(Role::Finish))?;
        let cols = width.unwrap_or(0) as i32;
        let mut grid = Grid::new(rows, cols, start, finish)?;
        for p in walls {
            grid.set_wall(p, true)?;
        }
        Ok(grid)
    }
}

/// Layout character for `cell`. Roles win over the wall flag.
pub fn glyph(cell: &Cell) -> char {
    if cell.is_start {
        START
    } else if cell.is_finish {
        FINISH
    } else if cell.is_wall {
        WALL
    } else {
        OPEN
    }
}

fn set_role(slot: &mut Option<Pos>, role: Role, p: Pos) -> Result<(), GridError> {
    if slot.is_some() {
        return Err(GridError::DuplicateRole { role, pos: p });
    }
    *slot = Some(p);
    Ok(())
}

impl fmt::Display for Grid {
    /// Render the grid back into its ASCII layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in self.row(r) {
                write!(f, "{}", glyph(cell))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles_and_walls() {
        let g = Grid::parse("S..#\n.#..\n...F").unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.start(), Pos::new(0, 0));
        assert_eq!(g.finish(), Pos::new(2, 3));
        assert_eq!(g.wall_count(), 2);
        assert!(!g.is_passable(Pos::new(0, 3)));
        assert!(!g.is_passable(Pos::new(1, 1)));
    }

    #[test]
    fn test_display_round_trips_layout() {
        let layout = "S..#\n.#..\n...F";
        assert_eq!(Grid::parse(layout).unwrap().to_string(), layout);
    }

    #[test]
    fn test_inconsistent_size() {
        assert_eq!(
            Grid::parse("S..\n..\n..F"),
            Err(GridError::InconsistentSize {
                line: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_missing_roles() {
        assert_eq!(
            Grid::parse("...\n..F"),
            Err(GridError::NoStartOrFinish(Role::Start))
        );
        assert_eq!(
            Grid::parse("S..\n..."),
            Err(GridError::NoStartOrFinish(Role::Finish))
        );
        assert_eq!(Grid::parse(""), Err(GridError::NoStartOrFinish(Role::Start)));
    }

    #[test]
    fn test_duplicate_role() {
        assert_eq!(
            Grid::parse("S.S\n..F"),
            Err(GridError::DuplicateRole {
                role: Role::Start,
                pos: Pos::new(0, 2)
            })
        );
        assert_eq!(
            Grid::parse("SFF"),
            Err(GridError::DuplicateRole {
                role: Role::Finish,
                pos: Pos::new(0, 2)
            })
        );
    }

    #[test]
    fn test_invalid_rune() {
        assert_eq!(
            Grid::parse("S.x\n..F"),
            Err(GridError::InvalidRune {
                ch: 'x',
                pos: Pos::new(0, 2)
            })
        );
    }
}
