//! [`FloorSet`]: every floor of a building plus the connectors between them.

use std::collections::HashSet;

use crate::plan::{FloorPlan, Room, VerticalConnector};

/// A room together with the floor it sits on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomEntry<'a> {
    pub floor_id: &'a str,
    pub room: &'a Room,
}

/// Selectable rooms of one floor, as offered by a floor picker.
#[derive(Clone, Debug, PartialEq)]
pub struct FloorRooms<'a> {
    pub floor_id: &'a str,
    pub label: &'a str,
    pub rooms: Vec<&'a Room>,
}

/// A connector stop that cannot be linked because its waypoint is missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorIssue {
    pub connector: String,
    pub floor_id: String,
    pub waypoint_id: String,
}

/// The complete static configuration of a building.
///
/// Floors keep their configured order, which is also the order floor
/// pickers and room listings use.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorSet {
    pub floors: Vec<FloorPlan>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub connectors: Vec<VerticalConnector>,
}

impl FloorSet {
    pub fn new(floors: Vec<FloorPlan>, connectors: Vec<VerticalConnector>) -> Self {
        Self { floors, connectors }
    }

    pub fn floor(&self, floor_id: &str) -> Option<&FloorPlan> {
        self.floors.iter().find(|f| f.floor_id == floor_id)
    }

    /// Display label of a floor, or the id itself for an unknown floor.
    pub fn label<'a>(&'a self, floor_id: &'a str) -> &'a str {
        self.floor(floor_id).map_or(floor_id, FloorPlan::label)
    }

    /// Find a room anywhere in the building.
    pub fn locate_room(&self, room_id: &str) -> Option<RoomEntry<'_>> {
        self.floors.iter().find_map(|floor| {
            floor.room(room_id).map(|room| RoomEntry {
                floor_id: &floor.floor_id,
                room,
            })
        })
    }

    /// All rooms that can be picked as a route endpoint, in floor order.
    pub fn selectable_rooms(&self) -> Vec<RoomEntry<'_>> {
        self.floors
            .iter()
            .flat_map(|floor| {
                floor
                    .rooms
                    .iter()
                    .filter(|r| r.is_selectable())
                    .map(|room| RoomEntry {
                        floor_id: &floor.floor_id,
                        room,
                    })
            })
            .collect()
    }

    /// Selectable rooms grouped per floor.
    pub fn rooms_by_floor(&self) -> Vec<FloorRooms<'_>> {
        self.floors
            .iter()
            .map(|floor| FloorRooms {
                floor_id: &floor.floor_id,
                label: floor.label(),
                rooms: floor.rooms.iter().filter(|r| r.is_selectable()).collect(),
            })
            .collect()
    }

    /// Connector stops whose waypoint does not exist on the named floor.
    ///
    /// Such stops are left out of the multi-floor graph, so the connector
    /// simply does not reach that floor.
    pub fn connector_issues(&self) -> Vec<ConnectorIssue> {
        let mut issues = Vec::new();
        for connector in &self.connectors {
            for (floor_id, waypoint_id) in connector.stops() {
                let present = self
                    .floor(floor_id)
                    .is_some_and(|f| f.waypoint(waypoint_id).is_some());
                if !present {
                    issues.push(ConnectorIssue {
                        connector: connector.name.clone(),
                        floor_id: floor_id.to_owned(),
                        waypoint_id: waypoint_id.to_owned(),
                    });
                }
            }
        }
        issues
    }

    /// Log every configuration problem routing will silently work around.
    ///
    /// Returns the number of problems found.
    pub fn audit(&self) -> usize {
        let mut problems = 0;
        for issue in self.connector_issues() {
            log::warn!(
                "connector '{}' names waypoint '{}' which is missing on floor '{}'",
                issue.connector,
                issue.waypoint_id,
                issue.floor_id
            );
            problems += 1;
        }

        let mut seen = HashSet::new();
        for floor in &self.floors {
            if !seen.insert(floor.floor_id.as_str()) {
                log::warn!("floor '{}' is configured twice", floor.floor_id);
                problems += 1;
            }
            for room in &floor.rooms {
                if let Some(door) = room.doorway() {
                    if floor.waypoint(door).is_none() {
                        log::warn!(
                            "room '{}' on floor '{}' opens onto unknown waypoint '{}'",
                            room.id,
                            floor.floor_id,
                            door
                        );
                        problems += 1;
                    }
                }
            }
        }
        problems
    }
}
