//! The [`Grid`] type — a fixed-size rectangle of [`Cell`]s with one start
//! and one finish.
//!
//! Cells are stored row-major in a flat buffer. A grid's dimensions, walls
//! and roles are its topology; searches never write into it.

use crate::cell::Cell;
use crate::error::{GridError, Role};
use crate::geom::{Pos, Range};

/// A 2D grid of [`Cell`]s with exactly one start and one finish cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Pos,
    finish: Pos,
}

impl Grid {
    /// Create an all-open grid of `rows × cols` cells.
    pub fn new(rows: i32, cols: i32, start: Pos, finish: Pos) -> Result<Self, GridError> {
        Self::with_walls(rows, cols, start, finish, |_| false)
    }

    /// Create a grid, asking `is_wall` once per cell in row-major order.
    ///
    /// `is_wall` is consulted for the start and finish cells too (so that
    /// generators drawing from an RNG consume one draw per cell), but its
    /// answer is ignored there: role cells are never walls.
    pub fn with_walls(
        rows: i32,
        cols: i32,
        start: Pos,
        finish: Pos,
        mut is_wall: impl FnMut(Pos) -> bool,
    ) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidSize { rows, cols });
        }
        let bounds = Range::with_size(rows, cols);
        for p in [start, finish] {
            if !bounds.contains(p) {
                return Err(GridError::OutOfRange { pos: p, rows, cols });
            }
        }
        if start == finish {
            return Err(GridError::StartIsFinish(start));
        }

        let cells = bounds
            .iter()
            .map(|p| {
                let mut cell = Cell::open(p).with_wall(is_wall(p) && p != start && p != finish);
                cell.is_start = p == start;
                cell.is_finish = p == finish;
                cell
            })
            .collect();

        Ok(Self {
            cells,
            bounds,
            start,
            finish,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// The bounding range `[0, rows) × [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a successfully constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat row-major index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        self.bounds.index(p)
    }

    /// The start position.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// The finish position.
    #[inline]
    pub fn finish(&self) -> Pos {
        self.finish
    }

    fn out_of_range(&self, pos: Pos) -> GridError {
        GridError::OutOfRange {
            pos,
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    /// Flat row-major index of `p`, failing with `OutOfRange` outside.
    pub fn checked_index(&self, p: Pos) -> Result<usize, GridError> {
        self.index(p).ok_or_else(|| self.out_of_range(p))
    }

    /// Look up the cell at `p`.
    pub fn cell(&self, p: Pos) -> Result<&Cell, GridError> {
        self.checked_index(p).map(|i| &self.cells[i])
    }

    /// Look up the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Pos) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Pos) -> bool {
        self.get(p).is_some_and(Cell::is_passable)
    }

    /// Mark or clear a wall at `p`.
    ///
    /// The start cell cannot become a wall. Walling the finish is allowed and
    /// simply makes it unreachable.
    pub fn set_wall(&mut self, p: Pos, wall: bool) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        let cell = &mut self.cells[i];
        if wall && cell.is_start {
            return Err(GridError::RoleIsWall {
                role: Role::Start,
                pos: p,
            });
        }
        cell.is_wall = wall;
        Ok(())
    }

    /// Scan for the cell flagged as start, row-major.
    pub fn find_start(&self) -> Result<Pos, GridError> {
        self.cells
            .iter()
            .find(|c| c.is_start)
            .map(|c| c.pos)
            .ok_or(GridError::NoStartOrFinish(Role::Start))
    }

    /// Scan for the cell flagged as finish, row-major.
    pub fn find_finish(&self) -> Result<Pos, GridError> {
        self.cells
            .iter()
            .find(|c| c.is_finish)
            .map(|c| c.pos)
            .ok_or(GridError::NoStartOrFinish(Role::Finish))
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Iterator over the cells of row `r`. Empty if `r` is outside.
    pub fn row(&self, r: i32) -> std::slice::Iter<'_, Cell> {
        if r < 0 || r >= self.rows() {
            return self.cells[..0].iter();
        }
        let w = self.cols() as usize;
        let off = r as usize * w;
        self.cells[off..off + w].iter()
    }
}

/// Unchecked wire form of a [`Grid`]; turned into one through the same
/// construction path as [`Grid::with_walls`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Pos,
    finish: Pos,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let (rows, cols) = (raw.bounds.rows(), raw.bounds.cols());
        if raw.bounds.min != Pos::ZERO || raw.cells.len() != raw.bounds.len() {
            return Err(GridError::InvalidSize { rows, cols });
        }
        let wall_at = |p: Pos| raw.bounds.index(p).is_some_and(|i| raw.cells[i].is_wall);
        let mut grid = Self::with_walls(rows, cols, raw.start, raw.finish, wall_at)?;
        if wall_at(raw.finish) {
            grid.set_wall(raw.finish, true)?;
        }
        match grid.cells.iter().zip(&raw.cells).find(|(built, got)| built != got) {
            Some((built, _)) => Err(GridError::CellMismatch(built.pos)),
            None => Ok(grid),
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: i32, cols: i32) -> Grid {
        Grid::new(rows, cols, Pos::new(0, 0), Pos::new(rows - 1, cols - 1)).unwrap()
    }

    #[test]
    fn test_new_and_size() {
        let g = grid(20, 50);
        assert_eq!(g.rows(), 20);
        assert_eq!(g.cols(), 50);
        assert_eq!(g.len(), 1000);
        assert_eq!(g.wall_count(), 0);
        assert_eq!(g.start(), Pos::new(0, 0));
        assert_eq!(g.finish(), Pos::new(19, 49));
    }

    #[test]
    fn test_roles_set_from_coordinates() {
        let g = grid(3, 3);
        assert!(g.cell(Pos::new(0, 0)).unwrap().is_start);
        assert!(g.cell(Pos::new(2, 2)).unwrap().is_finish);
        assert_eq!(g.iter().filter(|c| c.is_start).count(), 1);
        assert_eq!(g.iter().filter(|c| c.is_finish).count(), 1);
        assert_eq!(g.find_start(), Ok(Pos::new(0, 0)));
        assert_eq!(g.find_finish(), Ok(Pos::new(2, 2)));
    }

    #[test]
    fn test_cell_out_of_range() {
        let g = grid(3, 4);
        for p in [Pos::new(-1, 0), Pos::new(0, -1), Pos::new(3, 0), Pos::new(0, 4)] {
            assert_eq!(
                g.cell(p),
                Err(GridError::OutOfRange {
                    pos: p,
                    rows: 3,
                    cols: 4
                })
            );
        }
        assert!(g.get(Pos::new(5, 5)).is_none());
        assert!(!g.is_passable(Pos::new(5, 5)));
    }

    #[test]
    fn test_iter_is_row_major() {
        let g = grid(2, 3);
        let pts: Vec<Pos> = g.iter().map(|c| c.pos).collect();
        assert_eq!(pts, g.bounds().iter().collect::<Vec<_>>());
        let row1: Vec<Pos> = g.row(1).map(|c| c.pos).collect();
        assert_eq!(row1, vec![Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)]);
        assert_eq!(g.row(2).count(), 0);
        assert_eq!(g.row(-1).count(), 0);
    }

    #[test]
    fn test_with_walls_never_walls_roles() {
        let mut asked = 0;
        let g = Grid::with_walls(3, 3, Pos::new(0, 0), Pos::new(2, 2), |_| {
            asked += 1;
            true
        })
        .unwrap();
        assert_eq!(asked, 9);
        assert_eq!(g.wall_count(), 7);
        assert!(g.is_passable(g.start()));
        assert!(g.is_passable(g.finish()));
    }

    #[test]
    fn test_set_wall() {
        let mut g = grid(3, 3);
        g.set_wall(Pos::new(1, 1), true).unwrap();
        assert!(!g.is_passable(Pos::new(1, 1)));
        g.set_wall(Pos::new(1, 1), false).unwrap();
        assert!(g.is_passable(Pos::new(1, 1)));
        assert_eq!(
            g.set_wall(Pos::new(0, 0), true),
            Err(GridError::RoleIsWall {
                role: Role::Start,
                pos: Pos::new(0, 0)
            })
        );
        g.set_wall(Pos::new(2, 2), true).unwrap();
        assert!(!g.is_passable(Pos::new(2, 2)));
        assert!(g.cell(Pos::new(2, 2)).unwrap().is_finish);
        assert!(matches!(
            g.set_wall(Pos::new(3, 0), true),
            Err(GridError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_invalid_construction() {
        assert_eq!(
            Grid::new(0, 5, Pos::ZERO, Pos::new(0, 1)),
            Err(GridError::InvalidSize { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(2, 2, Pos::new(1, 1), Pos::new(1, 1)),
            Err(GridError::StartIsFinish(Pos::new(1, 1)))
        );
        assert!(matches!(
            Grid::new(2, 2, Pos::ZERO, Pos::new(2, 0)),
            Err(GridError::OutOfRange { .. })
        ));
    }
}
