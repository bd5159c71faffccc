//! Single-floor pathfinder.

use floorway_core::{FloorPlan, Waypoint};

use crate::cost::CostModel;
use crate::distance::euclidean;
use crate::loader::FloorGraph;
use crate::search::PathSearch;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// A* pather over one floor's graph.
///
/// A step costs the straight-line distance plus `floor_penalty` when both
/// endpoints carry floor tags that differ. Untagged waypoints all count as
/// the same floor, which makes the heuristic plain Euclidean.
pub struct FloorPather<'g, 'a> {
    graph: &'g FloorGraph<'a>,
    model: &'g CostModel,
}

impl<'g, 'a> FloorPather<'g, 'a> {
    pub fn new(graph: &'g FloorGraph<'a>, model: &'g CostModel) -> Self {
        Self { graph, model }
    }

    fn step(&self, from: usize, to: usize) -> f64 {
        let d = euclidean(self.graph.position(from), self.graph.position(to));
        match (self.graph.level(from), self.graph.level(to)) {
            (Some(a), Some(b)) if a != b => d + self.model.floor_penalty,
            _ => d,
        }
    }
}

impl Pather for FloorPather<'_, '_> {
    fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
        buf.extend_from_slice(self.graph.neighbors(node));
    }
}

impl WeightedPather for FloorPather<'_, '_> {
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.step(from, to)
    }
}

impl AstarPather for FloorPather<'_, '_> {
    fn estimate(&self, from: usize, to: usize) -> f64 {
        self.step(from, to)
    }
}

impl<'a> FloorGraph<'a> {
    /// Shortest waypoint sequence from `start` to `end` on this floor.
    ///
    /// Returns `[start]` when both ids are equal, and an empty vector when
    /// either id is unknown or `end` cannot be reached.
    pub fn find_path(&self, start: &str, end: &str) -> Vec<&'a str> {
        self.find_path_with(start, end, &CostModel::default())
    }

    /// [`find_path`](Self::find_path) with explicit costs.
    pub fn find_path_with(&self, start: &str, end: &str, model: &CostModel) -> Vec<&'a str> {
        if start == end {
            return match self.index_of(start) {
                Some(i) => vec![self.id(i)],
                None => Vec::new(),
            };
        }
        let (Some(from), Some(to)) = (self.index_of(start), self.index_of(end)) else {
            log::debug!(
                "floor '{}': no waypoint '{start}' or '{end}'",
                self.floor_id()
            );
            return Vec::new();
        };

        let pather = FloorPather::new(self, model);
        let mut search = PathSearch::new(self.len());
        match search.astar_path(&pather, from, to) {
            Some(path) => path.into_iter().map(|i| self.id(i)).collect(),
            None => {
                log::debug!(
                    "floor '{}': '{end}' unreachable from '{start}'",
                    self.floor_id()
                );
                Vec::new()
            }
        }
    }
}

/// Shortest waypoint id sequence between two waypoints of a flat list.
///
/// `start == end` short-circuits to a one-element path without looking the
/// id up. Unknown ids and unreachable targets give an empty path.
pub fn find_path(start: &str, end: &str, waypoints: &[Waypoint]) -> Vec<String> {
    if start == end {
        return vec![start.to_owned()];
    }
    FloorGraph::from_waypoints("", waypoints)
        .find_path(start, end)
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Route between two rooms of the same floor, confined to that floor.
///
/// Both rooms are resolved to their doorway waypoints. A missing room, or a
/// room with no connected waypoint, gives an empty route without searching.
pub fn find_floor_route(start_room: &str, end_room: &str, plan: &FloorPlan) -> Vec<String> {
    let doorway = |room_id: &str| plan.room(room_id).and_then(|r| r.doorway());
    let (Some(start), Some(end)) = (doorway(start_room), doorway(end_room)) else {
        log::debug!(
            "floor '{}': '{start_room}' or '{end_room}' has no doorway",
            plan.floor_id
        );
        return Vec::new();
    };
    FloorGraph::from_plan(plan)
        .find_path(start, end)
        .into_iter()
        .map(str::to_owned)
        .collect()
}
