/// Undirected adjacency lists over dense node indices.
///
/// Every [`link`](Adjacency::link) updates both endpoints, so the graph is
/// symmetric whatever order edges are authored in. Neighbour order is
/// insertion order, which keeps searches deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
    lists: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Adjacency for `len` isolated nodes.
    pub fn new(len: usize) -> Self {
        Self {
            lists: vec![Vec::new(); len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Join `a` and `b`. Returns `false` if the edge already existed or is a
    /// self-loop.
    pub fn link(&mut self, a: usize, b: usize) -> bool {
        if a == b || self.lists[a].contains(&b) {
            return false;
        }
        self.lists[a].push(b);
        self.lists[b].push(a);
        true
    }

    #[inline]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.lists.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum::<usize>() / 2
    }
}
