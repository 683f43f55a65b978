//! Random obstacle placement.
//!
//! Each cell is an independent Bernoulli trial: one `f64` is drawn from the
//! RNG per cell, in row-major order, and the cell becomes a wall when the
//! draw is below the obstacle probability. Start and finish are never walls.

use log::debug;
use rand::Rng;

use crate::error::GridError;
use crate::geom::Pos;
use crate::grid::Grid;

impl Grid {
    /// Generate a grid with randomly placed walls.
    ///
    /// `probability` must lie in `[0, 1]`. With a seeded `rng` the layout is
    /// reproducible.
    pub fn generate<R: Rng>(
        rows: i32,
        cols: i32,
        start: Pos,
        finish: Pos,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }
        let grid = Self::with_walls(rows, cols, start, finish, |_| {
            rng.random::<f64>() < probability
        })?;
        debug!(
            "generated {}x{} grid with {} walls (p = {probability})",
            rows,
            cols,
            grid.wall_count()
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const START: Pos = Pos::new(0, 0);
    const FINISH: Pos = Pos::new(19, 49);

    #[test]
    fn test_zero_probability_has_no_walls() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = Grid::generate(20, 50, START, FINISH, 0.0, &mut rng).unwrap();
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn test_full_probability_walls_all_but_roles() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = Grid::generate(20, 50, START, FINISH, 1.0, &mut rng).unwrap();
        assert_eq!(g.wall_count(), 998);
        assert!(g.is_passable(START));
        assert!(g.is_passable(FINISH));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = Grid::generate(20, 50, START, FINISH, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::generate(20, 50, START, FINISH, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_density_roughly_matches_probability() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = Grid::generate(100, 100, START, Pos::new(99, 99), 0.25, &mut rng).unwrap();
        let walls = g.wall_count();
        assert!((2000..3000).contains(&walls), "walls = {walls}");
    }

    #[test]
    fn test_invalid_probability() {
        let mut rng = StdRng::seed_from_u64(0);
        for p in [-0.1, 1.5, f64::NAN] {
            let err = Grid::generate(3, 3, START, Pos::new(2, 2), p, &mut rng).unwrap_err();
            assert!(matches!(err, GridError::InvalidProbability(_)));
        }
    }
}
