//! Static floor-plan description: rooms, waypoints, walls and the vertical
//! connectors that join floors together.
//!
//! Everything in this module is plain configuration. It is loaded once and
//! never mutated; routing builds its own graphs on top of it per query.

use std::collections::BTreeMap;
use std::fmt;

use crate::geom::{Bounds, Point};

/// Room ids ending in this suffix are label-only areas, never route endpoints.
pub const CORRIDOR_SUFFIX: &str = "_corridor";

/// Walls shorter than this are skipped.
pub const MIN_WALL_LENGTH: f64 = 0.01;

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A named, labelled space reached through one (typically) doorway waypoint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: String,
    pub name: String,
    pub center: Point,
    #[cfg_attr(feature = "serde", serde(default))]
    pub connected_to: Vec<String>,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>, center: Point) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            center,
            connected_to: Vec::new(),
        }
    }

    /// Builder-style helper adding a connected waypoint.
    pub fn connect(mut self, waypoint_id: impl Into<String>) -> Self {
        self.connected_to.push(waypoint_id.into());
        self
    }

    /// The waypoint a route into or out of this room starts from.
    #[inline]
    pub fn doorway(&self) -> Option<&str> {
        self.connected_to.first().map(String::as_str)
    }

    /// Whether the room is connected to the waypoint graph at all.
    #[inline]
    pub fn is_navigable(&self) -> bool {
        !self.connected_to.is_empty()
    }

    /// Whether this is a label-only corridor area.
    #[inline]
    pub fn is_label_only(&self) -> bool {
        self.id.ends_with(CORRIDOR_SUFFIX)
    }

    /// Whether the room may be offered as a start or end of a route.
    #[inline]
    pub fn is_selectable(&self) -> bool {
        self.is_navigable() && !self.is_label_only()
    }
}

// ---------------------------------------------------------------------------
// Waypoint
// ---------------------------------------------------------------------------

/// A navigable point of a floor's walking graph.
///
/// Ids are globally unique by convention (`f3_wp_lift`), so `connected_to`
/// may also name waypoints on other floors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub id: String,
    pub position: Point,
    #[cfg_attr(feature = "serde", serde(default))]
    pub connected_to: Vec<String>,
    /// Optional floor tag, used when a waypoint list spanning several floors
    /// is searched as a single floor.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub floor: Option<i32>,
}

impl Waypoint {
    pub fn new(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
            connected_to: Vec::new(),
            floor: None,
        }
    }

    /// Builder-style helper adding a neighbour id.
    pub fn connect(mut self, waypoint_id: impl Into<String>) -> Self {
        self.connected_to.push(waypoint_id.into());
        self
    }

    /// Builder-style helper setting the floor tag.
    pub fn on_floor(mut self, floor: i32) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Whether the authored neighbour list names `id`.
    #[inline]
    pub fn lists(&self, id: &str) -> bool {
        self.connected_to.iter().any(|n| n == id)
    }
}

// ---------------------------------------------------------------------------
// Wall
// ---------------------------------------------------------------------------

/// A wall segment. Only rendering and plan bounds care about walls.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub p1: Point,
    pub p2: Point,
}

impl Wall {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.p1.distance(self.p2)
    }

    /// Whether the wall is too short to draw.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() < MIN_WALL_LENGTH
    }
}

// ---------------------------------------------------------------------------
// Vertical connectors
// ---------------------------------------------------------------------------

/// Physical kind of a vertical connector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ConnectorKind {
    Lift,
    Stairs,
    Ramp,
}

impl ConnectorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lift => "lift",
            Self::Stairs => "stairs",
            Self::Ramp => "ramp",
        }
    }
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lift, staircase or ramp present on several floors.
///
/// `floor_waypoints` maps a floor id to the waypoint standing for the
/// connector on that floor. Every floor jump through the connector costs
/// `cost_per_floor` on top of the travelled distance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerticalConnector {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ConnectorKind,
    pub cost_per_floor: f64,
    pub floor_waypoints: BTreeMap<String, String>,
}

impl VerticalConnector {
    pub fn new(name: impl Into<String>, kind: ConnectorKind, cost_per_floor: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            cost_per_floor,
            floor_waypoints: BTreeMap::new(),
        }
    }

    /// Builder-style helper placing the connector on a floor.
    pub fn stop(mut self, floor_id: impl Into<String>, waypoint_id: impl Into<String>) -> Self {
        self.floor_waypoints
            .insert(floor_id.into(), waypoint_id.into());
        self
    }

    /// The connector's waypoint on `floor_id`, if it serves that floor.
    #[inline]
    pub fn waypoint_on(&self, floor_id: &str) -> Option<&str> {
        self.floor_waypoints.get(floor_id).map(String::as_str)
    }

    /// Whether `waypoint_id` is one of the connector's stops.
    #[inline]
    pub fn serves(&self, waypoint_id: &str) -> bool {
        self.floor_waypoints.values().any(|w| w == waypoint_id)
    }

    /// Whether the connector has a stop at both waypoints.
    #[inline]
    pub fn links(&self, a: &str, b: &str) -> bool {
        self.serves(a) && self.serves(b)
    }

    /// `(floor_id, waypoint_id)` pairs in floor-id order.
    pub fn stops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.floor_waypoints
            .iter()
            .map(|(f, w)| (f.as_str(), w.as_str()))
    }
}

// ---------------------------------------------------------------------------
// FloorPlan
// ---------------------------------------------------------------------------

fn default_wall_height() -> f64 {
    3.0
}

fn default_wall_thickness() -> f64 {
    0.2
}

/// Static description of one floor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorPlan {
    pub floor_id: String,
    /// Numeric level; also the vertical coordinate used by multi-floor search.
    pub number: i32,
    pub name: String,
    /// Short label shown in floor pickers. Falls back to `name`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rooms: Vec<Room>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub waypoints: Vec<Waypoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<Wall>,
    #[cfg_attr(feature = "serde", serde(default = "default_wall_height"))]
    pub wall_height: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_wall_thickness"))]
    pub wall_thickness: f64,
}

impl FloorPlan {
    pub fn new(floor_id: impl Into<String>, number: i32, name: impl Into<String>) -> Self {
        Self {
            floor_id: floor_id.into(),
            number,
            name: name.into(),
            label: None,
            rooms: Vec::new(),
            waypoints: Vec::new(),
            walls: Vec::new(),
            wall_height: default_wall_height(),
            wall_thickness: default_wall_thickness(),
        }
    }

    /// Label for floor pickers.
    #[inline]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn waypoint(&self, id: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id == id)
    }

    /// Bounding box over all non-degenerate walls.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_walls(&self.walls)
    }
}

impl Bounds {
    /// Bounding box over the endpoints of every non-degenerate wall, or
    /// `None` if there is nothing to draw.
    pub fn from_walls(walls: &[Wall]) -> Option<Self> {
        Self::from_points(
            walls
                .iter()
                .filter(|w| !w.is_degenerate())
                .flat_map(|w| [w.p1, w.p2]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_selection_rules() {
        let lab = Room::new("f1_lab1", "Lab 1", Point::new(17.5, -5.25)).connect("f1_wp_lab1");
        assert_eq!(lab.doorway(), Some("f1_wp_lab1"));
        assert!(lab.is_selectable());

        let corridor =
            Room::new("f1_corridor", "Main Corridor", Point::ZERO).connect("f1_wp_mid");
        assert!(corridor.is_navigable());
        assert!(corridor.is_label_only());
        assert!(!corridor.is_selectable());

        let closet = Room::new("f1_closet", "Closet", Point::ZERO);
        assert_eq!(closet.doorway(), None);
        assert!(!closet.is_selectable());
    }

    #[test]
    fn connector_stops() {
        let lift = VerticalConnector::new("Main Lift", ConnectorKind::Lift, 5.0)
            .stop("f2", "f2_wp_lift")
            .stop("f1", "f1_wp_lift");
        assert_eq!(lift.waypoint_on("f1"), Some("f1_wp_lift"));
        assert_eq!(lift.waypoint_on("f3"), None);
        assert!(lift.links("f1_wp_lift", "f2_wp_lift"));
        assert!(!lift.links("f1_wp_lift", "f1_wp_mid"));
        let floors: Vec<_> = lift.stops().map(|(f, _)| f).collect();
        assert_eq!(floors, ["f1", "f2"]);
        assert_eq!(lift.kind.to_string(), "lift");
    }

    #[test]
    fn plan_bounds_skip_degenerate_walls() {
        let mut plan = FloorPlan::new("f1", 1, "Ground Floor");
        assert_eq!(plan.bounds(), None);
        plan.walls.push(Wall::new(Point::new(-26.0, -9.0), Point::new(26.0, -9.0)));
        plan.walls.push(Wall::new(Point::new(26.0, -9.0), Point::new(26.0, 9.0)));
        plan.walls.push(Wall::new(Point::new(40.0, 40.0), Point::new(40.0, 40.001)));
        let b = plan.bounds().unwrap();
        assert_eq!(b.min, Point::new(-26.0, -9.0));
        assert_eq!(b.max, Point::new(26.0, 9.0));
    }

    #[test]
    fn plan_label_falls_back_to_name() {
        let mut plan = FloorPlan::new("f3", 3, "CSE Department");
        assert_eq!(plan.label(), "CSE Department");
        plan.label = Some("2nd Floor (CSE)".into());
        assert_eq!(plan.label(), "2nd Floor (CSE)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn connector_kind_field_is_named_type() {
        let json = r#"{
            "name": "Main Lift",
            "type": "lift",
            "cost_per_floor": 5,
            "floor_waypoints": { "f1": "f1_wp_lift", "f2": "f2_wp_lift" }
        }"#;
        let c: VerticalConnector = serde_json::from_str(json).unwrap();
        assert_eq!(c.kind, ConnectorKind::Lift);
        assert_eq!(c.cost_per_floor, 5.0);
        assert_eq!(c.waypoint_on("f2"), Some("f2_wp_lift"));
    }

    #[test]
    fn plan_defaults() {
        let json = r#"{ "floor_id": "f6", "number": 6, "name": "Floor 6" }"#;
        let plan: FloorPlan = serde_json::from_str(json).unwrap();
        assert!(plan.rooms.is_empty());
        assert!(plan.walls.is_empty());
        assert_eq!(plan.wall_height, 3.0);
        assert_eq!(plan.wall_thickness, 0.2);
        assert_eq!(plan.label, None);
    }
}
