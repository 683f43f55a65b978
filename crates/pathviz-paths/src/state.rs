use pathviz_core::{Grid, Pos, Range};

/// Sentinel distance meaning "not reached" (+infinity).
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Per-cell search record
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    /// Tentative distance from start (`g`).
    pub(crate) distance: i32,
    /// Settled: popped from the frontier with its final distance.
    pub(crate) visited: bool,
    /// Back-link to the predecessor on the best known path.
    pub(crate) previous: Option<Pos>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            distance: UNREACHABLE,
            visited: false,
            previous: None,
        }
    }
}

/// Frontier entry, ordered by `f` then by insertion sequence for use in a
/// `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    /// Distance at the time of insertion; used to skip superseded entries.
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the entry inserted first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Per-run search data for one grid: tentative distances, visited flags and
/// back-links, indexed by position.
///
/// The grid itself is never written to. A state is filled by one search and
/// must be [`reset`](SearchState::reset) before the next one; a search on a
/// dirty state is refused rather than mixed with stale results.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub(crate) rng: Range,
    pub(crate) nodes: Vec<Node>,
    pub(crate) dirty: bool,
    pub(crate) seq: u64,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Pos>,
}

impl SearchState {
    /// Create a fresh state sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self::with_range(grid.bounds())
    }

    /// Create a fresh state for the given rectangle.
    pub fn with_range(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![Node::default(); rng.len()],
            dirty: false,
            seq: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Restore every cell to `distance = UNREACHABLE`, `visited = false`,
    /// `previous = None`.
    pub fn reset(&mut self) {
        for n in self.nodes.iter_mut() {
            *n = Node::default();
        }
        self.seq = 0;
        self.dirty = false;
    }

    /// Whether the state holds results of a previous search.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The rectangle this state covers.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Tentative distance of `p`. [`UNREACHABLE`] if outside the range or
    /// not reached.
    pub fn distance(&self, p: Pos) -> i32 {
        self.node(p).map_or(UNREACHABLE, |n| n.distance)
    }

    /// Whether `p` was settled by the last search.
    pub fn is_visited(&self, p: Pos) -> bool {
        self.node(p).is_some_and(|n| n.visited)
    }

    /// Back-link of `p`, if any.
    pub fn previous(&self, p: Pos) -> Option<Pos> {
        self.node(p).and_then(|n| n.previous)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    #[inline]
    fn node(&self, p: Pos) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// Convert a `Pos` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        self.rng.index(p)
    }

    /// Convert a flat index back to a `Pos`.
    #[inline]
    pub(crate) fn pos(&self, idx: usize) -> Pos {
        self.rng.pos(idx)
    }

    /// Next insertion sequence number for the frontier.
    #[inline]
    pub(crate) fn next_seq(&mut self) -> u64 {
        let s = self.seq;
        self.seq += 1;
        s
    }
}
