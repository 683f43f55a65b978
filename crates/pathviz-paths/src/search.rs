use std::collections::BinaryHeap;

use log::{debug, trace};
use pathviz_core::{Grid, Pos};

use crate::error::SearchError;
use crate::heuristic::Uniform;
use crate::state::{NodeRef, SearchState};
use crate::traits::{Heuristic, Pather};

/// Result of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    /// Cells in the exact order they were settled, start first. One entry
    /// per animation frame.
    pub visited: Vec<Pos>,
    /// Whether the finish was settled.
    pub reached: bool,
}

impl SearchState {
    /// Uniform-cost (Dijkstra) search from `start` to `finish`.
    ///
    /// Each step costs 1 and moves up, down, left or right. Exploration stops
    /// the moment `finish` is settled. Distances, visited flags and back-links
    /// are written into `self`; use [`reconstruct_path`] afterwards to read
    /// the route.
    ///
    /// [`reconstruct_path`]: SearchState::reconstruct_path
    pub fn search(
        &mut self,
        grid: &Grid,
        start: Pos,
        finish: Pos,
    ) -> Result<Search, SearchError> {
        self.search_with(grid, start, finish, &Uniform)
    }

    /// Best-first search ordered by `distance + heuristic.estimate(p, finish)`.
    ///
    /// With [`Uniform`] this is exactly [`search`](SearchState::search); with
    /// an admissible, consistent estimate it is A*. Ties are broken by
    /// insertion order, so the result is deterministic.
    pub fn search_with<H: Heuristic + ?Sized>(
        &mut self,
        grid: &Grid,
        start: Pos,
        finish: Pos,
        heuristic: &H,
    ) -> Result<Search, SearchError> {
        let si = self.check(grid, start, finish)?;
        self.dirty = true;

        debug!(
            "search {}x{} grid from {start} to {finish}",
            grid.rows(),
            grid.cols()
        );

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut visited = Vec::new();

        self.nodes[si].distance = 0;
        let f = heuristic.estimate(start, finish);
        let seq = self.next_seq();
        open.push(NodeRef {
            idx: si,
            g: 0,
            f,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let reached = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;
            let cn = &mut self.nodes[ci];

            // Skip settled cells and entries superseded by a shorter distance.
            if cn.visited || current.g > cn.distance {
                continue;
            }

            cn.visited = true;
            let current_g = cn.distance;
            let cp = self.pos(ci);
            visited.push(cp);
            trace!("settled {cp} at distance {current_g}");

            if cp == finish {
                break 'search true;
            }

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.visited {
                    continue;
                }
                let tentative = current_g + 1;
                if tentative >= n.distance {
                    continue;
                }

                n.distance = tentative;
                n.previous = Some(cp);

                let f = tentative.saturating_add(heuristic.estimate(np, finish));
                let seq = self.next_seq();
                open.push(NodeRef {
                    idx: ni,
                    g: tentative,
                    f,
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        debug!(
            "search settled {} cells, finish {}",
            visited.len(),
            if reached { "reached" } else { "unreachable" }
        );

        Ok(Search { visited, reached })
    }

    /// Structural checks, all done before any state is touched. Returns the
    /// flat index of `start`.
    fn check(&self, grid: &Grid, start: Pos, finish: Pos) -> Result<usize, SearchError> {
        if self.nodes.len() != grid.len() || self.rng != grid.bounds() {
            return Err(SearchError::SizeMismatch {
                state: self.nodes.len(),
                grid: grid.len(),
            });
        }
        if self.dirty {
            return Err(SearchError::StateNotReset);
        }
        let si = grid.checked_index(start)?;
        grid.checked_index(finish)?;
        if start == finish {
            return Err(SearchError::StartIsFinish(start));
        }
        if !grid.is_passable(start) {
            return Err(SearchError::StartIsWall(start));
        }
        Ok(si)
    }
}
