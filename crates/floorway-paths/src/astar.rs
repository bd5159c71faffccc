use std::collections::BinaryHeap;

use crate::search::{NodeRef, PathSearch};
use crate::traits::AstarPather;

impl PathSearch {
    /// Compute the cheapest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if either
    /// index is out of range or no path exists.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: usize,
        to: usize,
    ) -> Option<Vec<usize>> {
        if from >= self.nodes.len() || to >= self.nodes.len() {
            return None;
        }
        if from == to {
            return Some(vec![from]);
        }

        let cur_gen = self.next_generation();
        let mut seq = 0u64;

        // Initialise the start node.
        {
            let node = &mut self.nodes[from];
            node.g = 0.0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
            node.seq = seq;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: from,
            f: self.nodes[from].f,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open || current.f > cn.f {
                continue;
            }

            if ci == to {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;

            nbuf.clear();
            pather.neighbors(ci, &mut nbuf);

            for &ni in nbuf.iter() {
                if ni >= self.nodes.len() {
                    continue;
                }
                let tentative_g = current_g + pather.cost(ci, ni);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    // First discovery fixes the node's place among f ties.
                    seq += 1;
                    n.generation = cur_gen;
                    n.seq = seq;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(ni, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    seq: n.seq,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = to;
        while ci != usize::MAX {
            path.push(ci);
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather};

    /// Small weighted graph given as an undirected edge list on a line.
    struct LinePather {
        xs: Vec<f64>,
        edges: Vec<(usize, usize)>,
    }

    impl Pather for LinePather {
        fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
            for &(a, b) in &self.edges {
                if a == node {
                    buf.push(b);
                } else if b == node {
                    buf.push(a);
                }
            }
        }
    }

    impl WeightedPather for LinePather {
        fn cost(&self, from: usize, to: usize) -> f64 {
            (self.xs[from] - self.xs[to]).abs()
        }
    }

    impl AstarPather for LinePather {
        fn estimate(&self, from: usize, to: usize) -> f64 {
            (self.xs[from] - self.xs[to]).abs()
        }
    }

    #[test]
    fn trivial_path() {
        let p = LinePather {
            xs: vec![0.0],
            edges: vec![],
        };
        let mut s = PathSearch::new(1);
        assert_eq!(s.astar_path(&p, 0, 0), Some(vec![0]));
    }

    #[test]
    fn out_of_range_is_none() {
        let p = LinePather {
            xs: vec![0.0, 1.0],
            edges: vec![(0, 1)],
        };
        let mut s = PathSearch::new(2);
        assert_eq!(s.astar_path(&p, 0, 2), None);
    }

    #[test]
    fn prefers_cheaper_detour() {
        // 0 -- 1 -- 3 is short, 0 -- 2 -- 3 goes far out.
        let p = LinePather {
            xs: vec![0.0, 1.0, 10.0, 2.0],
            edges: vec![(0, 2), (2, 3), (0, 1), (1, 3)],
        };
        let mut s = PathSearch::new(4);
        assert_eq!(s.astar_path(&p, 0, 3), Some(vec![0, 1, 3]));
    }

    #[test]
    fn disconnected_is_none() {
        let p = LinePather {
            xs: vec![0.0, 1.0, 2.0],
            edges: vec![(0, 1)],
        };
        let mut s = PathSearch::new(3);
        assert_eq!(s.astar_path(&p, 0, 2), None);
        assert_eq!(s.astar_path(&p, 1, 0), Some(vec![1, 0]));
    }

    #[test]
    fn reuse_across_queries() {
        let p = LinePather {
            xs: vec![0.0, 1.0, 2.0, 3.0],
            edges: vec![(0, 1), (1, 2), (2, 3)],
        };
        let mut s = PathSearch::new(4);
        assert_eq!(s.astar_path(&p, 0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(s.astar_path(&p, 3, 1), Some(vec![3, 2, 1]));
        assert_eq!(s.astar_path(&p, 2, 0), Some(vec![2, 1, 0]));
    }

    #[test]
    fn equal_cost_ties_go_to_first_found() {
        // Two equally long routes 0-1-3 and 0-2-3; neighbour 1 is listed first.
        let p = LinePather {
            xs: vec![0.0, 1.0, 1.0, 2.0],
            edges: vec![(0, 1), (0, 2), (1, 3), (2, 3)],
        };
        let mut s = PathSearch::new(4);
        for _ in 0..3 {
            assert_eq!(s.astar_path(&p, 0, 3), Some(vec![0, 1, 3]));
        }
    }

    /// Explicit edge costs and no heuristic, so A* runs as Dijkstra.
    struct TablePather {
        edges: Vec<(usize, usize, f64)>,
    }

    impl Pather for TablePather {
        fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
            for &(a, b, _) in &self.edges {
                if a == node {
                    buf.push(b);
                } else if b == node {
                    buf.push(a);
                }
            }
        }
    }

    impl WeightedPather for TablePather {
        fn cost(&self, from: usize, to: usize) -> f64 {
            self.edges
                .iter()
                .find(|&&(a, b, _)| (a, b) == (from, to) || (b, a) == (from, to))
                .map_or(f64::INFINITY, |&(_, _, c)| c)
        }
    }

    impl AstarPather for TablePather {
        fn estimate(&self, _from: usize, _to: usize) -> f64 {
            0.0
        }
    }

    #[test]
    fn improved_node_keeps_its_discovery_order() {
        // 2 is found before 3 at cost 5, then improved through 1 to cost 3,
        // tying with 3. It still pops first, so the target is reached via 2.
        let p = TablePather {
            edges: vec![
                (0, 2, 5.0),
                (0, 3, 3.0),
                (0, 1, 1.0),
                (1, 2, 2.0),
                (2, 4, 1.0),
                (3, 4, 1.0),
            ],
        };
        let mut s = PathSearch::new(5);
        assert_eq!(s.astar_path(&p, 0, 4), Some(vec![0, 1, 2, 4]));
    }
}
