//! Ties grid generation, search and animation scheduling together.

use log::{info, warn};
use pathviz_core::{Grid, GridError, Pos};
use pathviz_paths::{Manhattan, Search, SearchError, SearchState};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{Algorithm, Config};
use crate::timeline::{Frame, timeline};

/// Everything one visualization run produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub search: Search,
    /// Reconstructed route. `[finish]` alone when no route exists.
    pub path: Vec<Pos>,
    /// Whether `path` leads from start to finish.
    pub found: bool,
    pub frames: Vec<Frame>,
}

/// Owns the current grid and the search state that runs over it.
pub struct Visualizer {
    config: Config,
    rng: StdRng,
    grid: Grid,
    state: SearchState,
}

impl Visualizer {
    /// Create a visualizer and generate its first grid.
    pub fn new(config: Config) -> Result<Self, GridError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = Self::generate_grid(&config, &mut rng)?;
        let state = SearchState::new(&grid);
        Ok(Self {
            config,
            rng,
            grid,
            state,
        })
    }

    fn generate_grid(config: &Config, rng: &mut StdRng) -> Result<Grid, GridError> {
        Grid::generate(
            config.rows,
            config.cols,
            config.start(),
            config.finish(),
            config.density,
            rng,
        )
    }

    /// Replace the grid with a freshly generated one at the current density.
    pub fn generate(&mut self) -> Result<(), GridError> {
        self.grid = Self::generate_grid(&self.config, &mut self.rng)?;
        self.state = SearchState::new(&self.grid);
        Ok(())
    }

    /// Change the obstacle density used by the next [`generate`](Self::generate).
    pub fn set_density(&mut self, density: f64) {
        self.config.set_density(density);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Reset the search state, search the current grid and schedule frames.
    pub fn visualize(&mut self) -> Result<Outcome, SearchError> {
        let start = self.grid.find_start()?;
        let finish = self.grid.find_finish()?;

        self.state.reset();
        let search = match self.config.algorithm {
            Algorithm::Dijkstra => self.state.search(&self.grid, start, finish)?,
            Algorithm::AStar => self
                .state
                .search_with(&self.grid, start, finish, &Manhattan)?,
        };

        let path = self.state.reconstruct_path(finish);
        let found = Search::path_found(&path, start);
        if found {
            info!(
                "{}: route of {} steps, {} cells explored",
                self.config.algorithm,
                path.len() - 1,
                search.settled()
            );
        } else {
            warn!("No path found from {start} to {finish}");
        }

        let frames = timeline(&search.visited, &path, start, self.config.delay_ms);
        Ok(Outcome {
            search,
            path,
            found,
            frames,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Config {
        Config {
            seed: Some(seed),
            ..Config::default()
        }
    }

    #[test]
    fn repeated_visualize_is_stable() {
        let mut v = Visualizer::new(seeded(4)).unwrap();
        let a = v.visualize().unwrap();
        let b = v.visualize().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.found, a.search.reached);
    }

    #[test]
    fn same_seed_same_grid() {
        let a = Visualizer::new(seeded(17)).unwrap();
        let b = Visualizer::new(seeded(17)).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn generate_replaces_grid_and_state() {
        let mut v = Visualizer::new(seeded(2)).unwrap();
        v.visualize().unwrap();
        v.set_density(0.3);
        v.generate().unwrap();
        assert_eq!(v.config().density, 0.3);
        assert!(!v.state().is_dirty());
        assert_eq!(v.grid().rows(), 20);
    }

    #[test]
    fn found_route_frames_cover_exploration_and_route() {
        let mut v = Visualizer::new(Config {
            rows: 5,
            cols: 5,
            density: 0.01,
            seed: Some(0),
            ..Config::default()
        })
        .unwrap();
        let out = v.visualize().unwrap();
        if out.found {
            assert_eq!(out.frames.len(), out.search.settled() + out.path.len() - 2);
            assert_eq!(out.path.len() as i32 - 1, v.state().distance(v.grid().finish()));
        } else {
            assert_eq!(out.frames.len(), out.search.settled());
        }
    }

    #[test]
    fn astar_finds_same_length_as_dijkstra() {
        let mut d = Visualizer::new(seeded(9)).unwrap();
        let mut a = Visualizer::new(Config {
            algorithm: Algorithm::AStar,
            ..seeded(9)
        })
        .unwrap();
        let (od, oa) = (d.visualize().unwrap(), a.visualize().unwrap());
        assert_eq!(od.found, oa.found);
        assert_eq!(od.path.len(), oa.path.len());
    }
}
