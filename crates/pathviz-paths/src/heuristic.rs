use pathviz_core::Pos;

use crate::traits::Heuristic;

/// The zero heuristic. Searching with it is uniform-cost (Dijkstra) search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uniform;

impl Heuristic for Uniform {
    #[inline]
    fn estimate(&self, _from: Pos, _to: Pos) -> i32 {
        0
    }
}

/// Manhattan (L1) distance, exact on an open 4-connected grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        from.manhattan(to)
    }
}
