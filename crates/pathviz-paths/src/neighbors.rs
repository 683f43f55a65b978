use pathviz_core::{Grid, Pos};

use crate::traits::Pather;

impl Pather for Grid {
    /// In-bounds, non-wall cardinal neighbors in the order up, down, left,
    /// right.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }
}
