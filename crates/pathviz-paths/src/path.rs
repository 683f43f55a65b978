use pathviz_core::Pos;

use crate::search::Search;
use crate::state::SearchState;

impl SearchState {
    /// Follow back-links from `finish` and return the route in start-to-finish
    /// order, both endpoints included.
    ///
    /// The walk ends at the first cell without a back-link. After a
    /// successful search that cell is the start. When the finish was never
    /// reached it has no back-link, so the result is just `[finish]`: callers
    /// detect that by comparing the first element with the start (see
    /// [`Search::path_found`]).
    pub fn reconstruct_path(&self, finish: Pos) -> Vec<Pos> {
        let mut path = Vec::new();
        let mut cur = Some(finish);
        while let Some(p) = cur {
            path.push(p);
            cur = self.previous(p);
        }
        path.reverse();
        path
    }
}

impl Search {
    /// Whether `path` (as returned by [`SearchState::reconstruct_path`])
    /// starts at `start`, i.e. a route was found.
    pub fn path_found(path: &[Pos], start: Pos) -> bool {
        path.first() == Some(&start)
    }

    /// The route from `start` to `finish`, or `None` if the finish was not
    /// reached by this search.
    pub fn path(&self, state: &SearchState, start: Pos, finish: Pos) -> Option<Vec<Pos>> {
        if !self.reached {
            return None;
        }
        let path = state.reconstruct_path(finish);
        Self::path_found(&path, start).then_some(path)
    }

    /// Number of settled cells.
    #[inline]
    pub fn settled(&self) -> usize {
        self.visited.len()
    }
}
