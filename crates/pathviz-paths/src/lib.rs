//! Shortest-path search on pathviz grids.
//!
//! The engine runs a label-setting search with unit step cost and
//! 4-directional movement:
//!
//! - **Dijkstra** uniform-cost search ([`SearchState::search`])
//! - **A\*** with a pluggable [`Heuristic`] ([`SearchState::search_with`])
//! - **Path reconstruction** from back-links ([`SearchState::reconstruct_path`])
//!
//! The grid is read-only during a search. Distances, visited flags and
//! back-links are written into a [`SearchState`], which must be reset before
//! it is reused. Each run returns the exact order in which cells were
//! settled, for frame-by-frame animation.
//!
//! # Trait overview
//!
//! | Trait | Role |
//! |---|---|
//! | [`Pather`] | neighbor enumeration, implemented for [`Grid`](pathviz_core::Grid) |
//! | [`Heuristic`] | frontier ordering estimate ([`Uniform`], [`Manhattan`], closures) |

mod error;
mod heuristic;
mod neighbors;
mod path;
mod search;
mod state;
mod traits;

pub use error::SearchError;
pub use heuristic::{Manhattan, Uniform};
pub use search::Search;
pub use state::{SearchState, UNREACHABLE};
pub use traits::{Heuristic, Pather};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use pathviz_core::{Grid, Pos};

    #[test]
    fn search_round_trip() {
        let g = Grid::parse("S.\n.F").unwrap();
        let mut st = SearchState::new(&g);
        let s = st.search(&g, g.start(), g.finish()).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: Search = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
        assert_eq!(back.visited[0], Pos::new(0, 0));
    }
}
