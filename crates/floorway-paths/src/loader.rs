//! Floor graph loader: one floor's static description turned into an
//! indexed, undirected waypoint graph.

use std::collections::HashMap;

use floorway_core::{Bounds, FloorPlan, Point, Room, Wall, Waypoint};

use crate::graph::Adjacency;

/// One floor's waypoint network, ready for searching.
///
/// Rooms, waypoints and walls are exposed exactly as configured. Authored
/// neighbour lists are merged into a symmetric [`Adjacency`]; ids that do not
/// resolve on this floor (other floors, typos) are left out.
#[derive(Clone, Debug)]
pub struct FloorGraph<'a> {
    floor_id: &'a str,
    rooms: &'a [Room],
    waypoints: &'a [Waypoint],
    walls: &'a [Wall],
    index: HashMap<&'a str, usize>,
    adjacency: Adjacency,
}

impl<'a> FloorGraph<'a> {
    /// Build the graph for a configured floor.
    pub fn from_plan(plan: &'a FloorPlan) -> Self {
        Self {
            rooms: &plan.rooms,
            walls: &plan.walls,
            ..Self::from_waypoints(&plan.floor_id, &plan.waypoints)
        }
    }

    /// Build a graph from a bare waypoint list, with no rooms or walls.
    pub fn from_waypoints(floor_id: &'a str, waypoints: &'a [Waypoint]) -> Self {
        let mut index = HashMap::with_capacity(waypoints.len());
        for (i, wp) in waypoints.iter().enumerate() {
            if index.contains_key(wp.id.as_str()) {
                log::warn!(
                    "floor '{floor_id}': duplicate waypoint '{}' ignored",
                    wp.id
                );
                continue;
            }
            index.insert(wp.id.as_str(), i);
        }

        let mut adjacency = Adjacency::new(waypoints.len());
        let mut repaired = 0usize;
        for (i, wp) in waypoints.iter().enumerate() {
            if index.get(wp.id.as_str()) != Some(&i) {
                continue;
            }
            for neighbor in &wp.connected_to {
                let Some(&j) = index.get(neighbor.as_str()) else {
                    continue;
                };
                if adjacency.link(i, j) && !waypoints[j].lists(&wp.id) {
                    repaired += 1;
                }
            }
        }
        if repaired > 0 {
            log::debug!("floor '{floor_id}': {repaired} one-way waypoint links made two-way");
        }

        Self {
            floor_id,
            rooms: &[],
            waypoints,
            walls: &[],
            index,
            adjacency,
        }
    }

    #[inline]
    pub fn floor_id(&self) -> &'a str {
        self.floor_id
    }

    #[inline]
    pub fn rooms(&self) -> &'a [Room] {
        self.rooms
    }

    #[inline]
    pub fn waypoints(&self) -> &'a [Waypoint] {
        self.waypoints
    }

    #[inline]
    pub fn walls(&self) -> &'a [Wall] {
        self.walls
    }

    /// Bounding box of the floor's walls, for sizing the rendered plane.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_walls(self.walls)
    }

    /// Number of nodes (configured waypoints, duplicates included).
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Node index of a waypoint id on this floor.
    #[inline]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Waypoint id of a node. Panics if `node` is out of range.
    #[inline]
    pub fn id(&self, node: usize) -> &'a str {
        &self.waypoints[node].id
    }

    /// Position of a node. Panics if `node` is out of range.
    #[inline]
    pub fn position(&self, node: usize) -> Point {
        self.waypoints[node].position
    }

    /// Floor tag of a node, if any.
    #[inline]
    pub(crate) fn level(&self, node: usize) -> Option<i32> {
        self.waypoints[node].floor
    }

    pub fn waypoint(&self, id: &str) -> Option<&'a Waypoint> {
        self.index_of(id).map(|i| &self.waypoints[i])
    }

    #[inline]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.neighbors(node)
    }

    #[inline]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn room(&self, id: &str) -> Option<&'a Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}
