//! Plain-text rendering of a finished run.

use pathviz_core::{Grid, Pos};
use pathviz_core::layout::glyph;

use crate::visualizer::Outcome;

/// Marker for a settled cell that is not on the route.
pub const VISITED: char = 'o';
/// Marker for a route cell.
pub const ROUTE: char = '*';

/// Draw `grid` with the exploration and, if found, the route overlaid.
/// Start, finish and walls keep their layout characters.
pub fn render(grid: &Grid, outcome: &Outcome) -> String {
    let mut marks: Vec<char> = grid.iter().map(glyph).collect();

    let mut overlay = |pos: Pos, ch: char| match (grid.get(pos), grid.index(pos)) {
        (Some(cell), Some(i)) if !cell.has_role() && !cell.is_wall => marks[i] = ch,
        _ => {}
    };
    for &p in &outcome.search.visited {
        overlay(p, VISITED);
    }
    if outcome.found {
        for &p in &outcome.path {
            overlay(p, ROUTE);
        }
    }

    marks
        .chunks(grid.cols() as usize)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_paths::{Search, SearchState};

    use crate::timeline::timeline;

    fn outcome(grid: &Grid) -> Outcome {
        let mut st = SearchState::new(grid);
        let search = st.search(grid, grid.start(), grid.finish()).unwrap();
        let path = st.reconstruct_path(grid.finish());
        let found = Search::path_found(&path, grid.start());
        let frames = timeline(&search.visited, &path, grid.start(), 50);
        Outcome {
            search,
            path,
            found,
            frames,
        }
    }

    #[test]
    fn draws_route_over_exploration() {
        let g = Grid::parse("S#.\n.#.\n..F").unwrap();
        let out = outcome(&g);
        assert_eq!(render(&g, &out), "S#.\n*#.\n**F");
    }

    #[test]
    fn unreachable_shows_exploration_only() {
        let g = Grid::parse("S.#\n###\n..F").unwrap();
        let out = outcome(&g);
        assert!(!out.found);
        assert_eq!(render(&g, &out), "So#\n###\n..F");
    }
}
