//! **floorway-core**: static indoor floor-plan model.
//!
//! This crate holds the configuration every routing query reads: floor plans
//! with their rooms, waypoints and walls, the vertical connectors (lifts,
//! stairs, ramps) joining floors, and the [`FloorSet`] that bundles them.
//!
//! With the `serde` feature a [`FloorSet`] can be loaded from JSON, see
//! [`FloorSet::from_json`] and [`FloorSet::load`].

#[cfg(feature = "serde")]
pub mod config;
pub mod geom;
pub mod plan;
pub mod registry;

#[cfg(feature = "serde")]
pub use config::{LoadError, LoadResult};
pub use geom::{Bounds, Point};
pub use plan::{
    CORRIDOR_SUFFIX, ConnectorKind, FloorPlan, MIN_WALL_LENGTH, Room, VerticalConnector, Wall,
    Waypoint,
};
pub use registry::{ConnectorIssue, FloorRooms, FloorSet, RoomEntry};
