//! Indoor routing over waypoint graphs, on one floor or across a building.
//!
//! Floors are described by [`floorway_core`]: waypoints with authored
//! neighbour lists, rooms opening onto a doorway waypoint, and vertical
//! connectors (lifts, stairs, ramps) standing on several floors.
//!
//! - **Floor graph** ([`FloorGraph`]): one floor as an undirected, indexed graph
//! - **Single-floor A\*** ([`find_path`], [`FloorGraph::find_path`], [`find_floor_route`])
//! - **Unified graph** ([`UnifiedGraph`]): all floors plus connector edges
//! - **Multi-floor A\*** ([`UnifiedGraph::find_path`])
//! - **Segmenting** ([`segment_path`]): a unified path cut into per-floor runs
//! - **Room routes** ([`find_route`]): the usual entry point
//!
//! Searches run on [`PathSearch`]; each query builds its own, and a caller
//! holding one can run several queries on the same graph without clearing it.
//! A query that finds nothing returns an empty result, never an error.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbours |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic, required by [`PathSearch::astar_path`] |

mod astar;
mod cost;
mod distance;
mod floor;
mod graph;
mod loader;
mod route;
mod search;
mod segment;
mod summary;
mod traits;
mod unified;

pub use cost::CostModel;
pub use distance::{euclidean, stacked};
pub use floor::{FloorPather, find_floor_route, find_path};
pub use graph::Adjacency;
pub use loader::FloorGraph;
pub use route::{find_route, find_route_with};
pub use search::{PathSearch, UNREACHABLE};
pub use segment::{PathSegment, Transition, segment_on, segment_path};
pub use summary::{RouteStep, RouteSummary};
pub use traits::{AstarPather, Pather, WeightedPather};
pub use unified::{UnifiedGraph, UnifiedNode, UnifiedPather};
