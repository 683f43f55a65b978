use pathviz_core::Pos;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append the passable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Cost-to-go estimate used to order the frontier.
///
/// `Uniform` (always 0) gives plain Dijkstra; an admissible, consistent
/// estimate such as [`Manhattan`](crate::Manhattan) turns the same search
/// into A*.
pub trait Heuristic {
    /// Estimated distance from `from` to `to`. Must never overestimate the
    /// true cost.
    fn estimate(&self, from: Pos, to: Pos) -> i32;
}

impl<F: Fn(Pos, Pos) -> i32> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        self(from, to)
    }
}
