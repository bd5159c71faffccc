//! Room-to-room routes across the whole building.

use floorway_core::FloorSet;

use crate::cost::CostModel;
use crate::segment::{PathSegment, segment_path};
use crate::unified::UnifiedGraph;

/// Route between two rooms, possibly on different floors.
///
/// Each room is resolved to its doorway waypoint, the unified graph is
/// searched, and the path is cut into per-floor segments. An empty result
/// means there is no route: an unknown room, a room with no connected
/// waypoint, or no connection between the doorways.
pub fn find_route(start_room: &str, end_room: &str, floors: &FloorSet) -> Vec<PathSegment> {
    find_route_with(start_room, end_room, floors, &CostModel::default())
}

/// [`find_route`] with explicit costs.
pub fn find_route_with(
    start_room: &str,
    end_room: &str,
    floors: &FloorSet,
    model: &CostModel,
) -> Vec<PathSegment> {
    let doorway = |room_id: &str| {
        let entry = floors.locate_room(room_id)?;
        entry.room.doorway()
    };
    let Some(start) = doorway(start_room) else {
        log::debug!("room '{start_room}' is unknown or has no doorway");
        return Vec::new();
    };
    let Some(end) = doorway(end_room) else {
        log::debug!("room '{end_room}' is unknown or has no doorway");
        return Vec::new();
    };
    log::debug!("routing '{start_room}' ({start}) to '{end_room}' ({end})");

    let graph = UnifiedGraph::build(floors);
    let path = graph.find_path(start, end, model);
    if path.is_empty() {
        return Vec::new();
    }
    let segments = segment_path(&path, &graph);
    log::debug!(
        "route of {} waypoints over {} floor(s)",
        path.len(),
        segments.len()
    );
    segments
}
