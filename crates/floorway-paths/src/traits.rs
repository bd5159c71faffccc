/// Graph view for searching: nodes are dense indices `0..len`.
pub trait Pather {
    /// Append the nodes adjacent to `node` into `buf`. The caller clears `buf` first.
    fn neighbors(&self, node: usize, buf: &mut Vec<usize>);
}

/// Pather whose edges carry a non-negative cost.
pub trait WeightedPather: Pather {
    /// Cost of the edge from `from` to its neighbour `to`.
    fn cost(&self, from: usize, to: usize) -> f64;
}

/// Weighted pather with a remaining-cost estimate, as A* needs.
pub trait AstarPather: WeightedPather {
    /// Estimated cost from `from` to `to`. An estimate above the true cost
    /// can make A* settle for a longer path.
    fn estimate(&self, from: usize, to: usize) -> f64;
}
