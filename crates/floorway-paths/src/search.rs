use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// Internal node for A* priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
    // push order of the node's first discovery in this generation
    pub(crate) seq: u64,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
            seq: 0,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
///
/// Equal `f` values pop in discovery order (`seq`), so ties go to the node
/// that was discovered first, even if its cost was improved later.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest, first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Sentinel cost meaning "not reached".
pub const UNREACHABLE: f64 = f64::INFINITY;

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Search state for a graph of `len` dense node indices.
///
/// `PathSearch` owns the node array and the neighbour scratch buffer. It can
/// run several queries on the same graph; each one starts a new generation
/// instead of clearing the nodes.
pub struct PathSearch {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<usize>,
}

impl PathSearch {
    /// Create search state for a graph with `len` nodes.
    pub fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Number of nodes this state can search over.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Start a new search generation, lazily invalidating every node.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: generation 0 is what fresh nodes carry.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.generation
    }
}
