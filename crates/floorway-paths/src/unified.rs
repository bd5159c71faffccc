//! Multi-floor graph builder and unified pathfinder.
//!
//! Every floor's waypoints are flattened into one graph. Authored neighbour
//! lists keep their cross-floor ids, and each vertical connector joins all of
//! its stops pairwise: a lift serving floors 1 to 6 links floor 1 straight to
//! floor 6, and a route through it pays the connector cost once per jump,
//! however many floors the jump skips.

use std::collections::HashMap;

use floorway_core::{FloorPlan, FloorSet, Point, VerticalConnector};

use crate::cost::CostModel;
use crate::distance::stacked;
use crate::graph::Adjacency;
use crate::search::PathSearch;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// A waypoint of the unified graph, tagged with its floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnifiedNode<'a> {
    pub id: &'a str,
    pub floor_id: &'a str,
    /// Floor number, the vertical coordinate of the search metric.
    pub level: i32,
    pub position: Point,
}

/// All floors' waypoints merged into one undirected graph.
#[derive(Clone, Debug)]
pub struct UnifiedGraph<'a> {
    nodes: Vec<UnifiedNode<'a>>,
    index: HashMap<&'a str, usize>,
    adjacency: Adjacency,
    connectors: &'a [VerticalConnector],
    // waypoint id -> indices of the connectors stopping there
    stops: HashMap<&'a str, Vec<usize>>,
}

impl<'a> UnifiedGraph<'a> {
    /// Build the unified graph for a whole building.
    pub fn build(floors: &'a FloorSet) -> Self {
        Self::from_parts(&floors.floors, &floors.connectors)
    }

    /// Build the unified graph from floors and connectors.
    pub fn from_parts(floors: &'a [FloorPlan], connectors: &'a [VerticalConnector]) -> Self {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        let mut authored = Vec::new();
        for floor in floors {
            for wp in &floor.waypoints {
                if index.contains_key(wp.id.as_str()) {
                    log::warn!(
                        "floor '{}': waypoint '{}' already defined elsewhere, ignored",
                        floor.floor_id,
                        wp.id
                    );
                    continue;
                }
                index.insert(wp.id.as_str(), nodes.len());
                nodes.push(UnifiedNode {
                    id: &wp.id,
                    floor_id: &floor.floor_id,
                    level: floor.number,
                    position: wp.position,
                });
                authored.push(&wp.connected_to);
            }
        }

        let mut adjacency = Adjacency::new(nodes.len());
        for (i, neighbors) in authored.iter().enumerate() {
            for neighbor in neighbors.iter() {
                match index.get(neighbor.as_str()) {
                    Some(&j) => {
                        adjacency.link(i, j);
                    }
                    None => log::warn!(
                        "waypoint '{}' links to unknown waypoint '{neighbor}'",
                        nodes[i].id
                    ),
                }
            }
        }

        let mut stops: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (ci, connector) in connectors.iter().enumerate() {
            let mut present = Vec::new();
            for (floor_id, waypoint_id) in connector.stops() {
                match index.get(waypoint_id) {
                    Some(&i) if nodes[i].floor_id == floor_id => {
                        stops.entry(nodes[i].id).or_default().push(ci);
                        present.push(i);
                    }
                    Some(&i) => log::warn!(
                        "connector '{}' skips floor '{floor_id}': waypoint '{waypoint_id}' is on floor '{}'",
                        connector.name,
                        nodes[i].floor_id
                    ),
                    None => log::warn!(
                        "connector '{}' skips floor '{floor_id}': no waypoint '{waypoint_id}'",
                        connector.name
                    ),
                }
            }
            for (k, &a) in present.iter().enumerate() {
                for &b in &present[k + 1..] {
                    adjacency.link(a, b);
                }
            }
        }

        log::debug!(
            "unified graph: {} waypoints, {} edges, {} connectors",
            nodes.len(),
            adjacency.edge_count(),
            connectors.len()
        );

        Self {
            nodes,
            index,
            adjacency,
            connectors,
            stops,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[UnifiedNode<'a>] {
        &self.nodes
    }

    /// Node at `idx`. Panics if out of range.
    #[inline]
    pub fn node(&self, idx: usize) -> &UnifiedNode<'a> {
        &self.nodes[idx]
    }

    #[inline]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn node_by_id(&self, id: &str) -> Option<&UnifiedNode<'a>> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    #[inline]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.neighbors(node)
    }

    #[inline]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    #[inline]
    pub fn connectors(&self) -> &'a [VerticalConnector] {
        self.connectors
    }

    /// The first configured connector with stops at both waypoints.
    pub fn connector_between(&self, a: &str, b: &str) -> Option<&'a VerticalConnector> {
        let at_a = self.stops.get(a)?;
        let at_b = self.stops.get(b)?;
        at_a.iter()
            .find(|&&ci| at_b.contains(&ci))
            .map(|&ci| &self.connectors[ci])
    }

    /// Shortest waypoint sequence from `start` to `end` across floors.
    ///
    /// Empty if either id is unknown or `end` cannot be reached.
    pub fn find_path(&self, start: &str, end: &str, model: &CostModel) -> Vec<&'a str> {
        let (Some(from), Some(to)) = (self.index_of(start), self.index_of(end)) else {
            log::debug!("unified graph: no waypoint '{start}' or '{end}'");
            return Vec::new();
        };
        let pather = UnifiedPather::new(self, model);
        let mut search = PathSearch::new(self.len());
        match search.astar_path(&pather, from, to) {
            Some(path) => path.into_iter().map(|i| self.nodes[i].id).collect(),
            None => {
                log::debug!("unified graph: '{end}' unreachable from '{start}'");
                Vec::new()
            }
        }
    }
}

/// A* pather over the unified graph.
///
/// Distances treat the floor number, scaled by `floor_scale`, as a third
/// axis. Crossing floors also costs the connector's `cost_per_floor`.
pub struct UnifiedPather<'g, 'a> {
    graph: &'g UnifiedGraph<'a>,
    model: &'g CostModel,
}

impl<'g, 'a> UnifiedPather<'g, 'a> {
    pub fn new(graph: &'g UnifiedGraph<'a>, model: &'g CostModel) -> Self {
        Self { graph, model }
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        let a = self.graph.node(from);
        let b = self.graph.node(to);
        stacked(a.position, a.level, b.position, b.level, self.model.floor_scale)
    }

    fn transfer_cost(&self, from: usize, to: usize) -> f64 {
        let a = self.graph.node(from);
        let b = self.graph.node(to);
        if a.floor_id == b.floor_id {
            return 0.0;
        }
        match self.graph.connector_between(a.id, b.id) {
            Some(connector) => connector.cost_per_floor,
            None => {
                log::warn!(
                    "no connector joins '{}' and '{}'; using fallback cost {}",
                    a.id,
                    b.id,
                    self.model.fallback_connector_cost
                );
                self.model.fallback_connector_cost
            }
        }
    }
}

impl Pather for UnifiedPather<'_, '_> {
    fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
        buf.extend_from_slice(self.graph.neighbors(node));
    }
}

impl WeightedPather for UnifiedPather<'_, '_> {
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.distance(from, to) + self.transfer_cost(from, to)
    }
}

impl AstarPather for UnifiedPather<'_, '_> {
    fn estimate(&self, from: usize, to: usize) -> f64 {
        self.distance(from, to)
    }
}
