//! Six-floor campus used by the `route` demo.
//!
//! Every floor is a single east-west corridor with rooms on both sides. The
//! floors are joined by a lift, two stair cores and a ramp.

use floorway_core::{FloorSet, LoadResult};

/// The bundled campus layout as JSON.
pub const CAMPUS_JSON: &str = include_str!("../data/campus.json");

/// Parse the bundled campus.
pub fn campus() -> LoadResult<FloorSet> {
    FloorSet::from_json(CAMPUS_JSON)
}

/// Selectable rooms, one floor per block, as a floor picker would show them.
pub fn room_listing(floors: &FloorSet) -> String {
    let mut out = String::new();
    for group in floors.rooms_by_floor() {
        out.push_str(&format!("{} ({})\n", group.label, group.floor_id));
        for room in group.rooms {
            out.push_str(&format!("  {:<16} {}\n", room.id, room.name));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorway_core::{ConnectorKind, Point};
    use floorway_paths::{FloorGraph, RouteSummary, find_floor_route, find_route, segment_on};

    #[test]
    fn campus_loads_cleanly() {
        let set = campus().unwrap();
        assert_eq!(set.floors.len(), 6);
        assert_eq!(set.connectors.len(), 4);
        assert_eq!(set.audit(), 0);
        assert_eq!(set.label("f3"), "2nd Floor (CSE)");
        // Corridors are label-only.
        assert_eq!(set.selectable_rooms().len(), 10 + 13 + 4 * 10);
    }

    #[test]
    fn listing_groups_rooms_by_floor() {
        let set = campus().unwrap();
        let listing = room_listing(&set);
        assert!(listing.starts_with("Ground Floor (f1)\n"));
        assert!(listing.contains("  f2_lab7          Lab 7\n"));
        assert!(!listing.contains("corridor"));
        // One header per floor plus one line per selectable room.
        assert_eq!(listing.lines().count(), 6 + set.selectable_rooms().len());
    }

    #[test]
    fn floor_plane_covers_the_walls() {
        let set = campus().unwrap();
        let g = FloorGraph::from_plan(set.floor("f1").unwrap());
        let b = g.bounds().unwrap();
        assert_eq!(b.size(), Point::new(52.0, 18.0));
        assert_eq!(b.center(), Point::ZERO);
    }

    #[test]
    fn floor_local_route() {
        let set = campus().unwrap();
        let f3 = set.floor("f3").unwrap();
        assert_eq!(
            find_floor_route("f3_lift", "f3_lab_a", f3),
            ["f3_wp_lift", "f3_wp_stairs_bot", "f3_wp_mid", "f3_wp_right"]
        );
    }

    #[test]
    fn lift_skips_intermediate_floors() {
        let set = campus().unwrap();
        let route = find_route("f1_lift", "f6_lift", &set);
        assert_eq!(route.len(), 2);
        assert_eq!(route[0].waypoint_ids, ["f1_wp_lift"]);
        assert_eq!(route[1].waypoint_ids, ["f6_wp_lift"]);
        let t = route[0].transition.as_ref().unwrap();
        assert_eq!(t.kind, ConnectorKind::Lift);
        assert_eq!(t.name, "Main Lift");
        assert_eq!((t.from_floor.as_str(), t.to_floor.as_str()), ("f1", "f6"));
    }

    #[test]
    fn stairs_down_from_the_cse_floor() {
        let set = campus().unwrap();
        let route = find_route("f2_lab7", "f1_canteen", &set);
        assert_eq!(route.len(), 2);
        assert_eq!(route[0].waypoint_ids, ["f2_wp_lab7", "f2_wp_stairs_bot"]);
        assert_eq!(route[1].waypoint_ids, ["f1_wp_stairs_bot", "f1_wp_mid"]);
        let t = route[0].transition.as_ref().unwrap();
        assert_eq!(t.kind, ConnectorKind::Stairs);
        assert_eq!(t.name, "Main Stairs (Bottom)");
    }

    #[test]
    fn ramp_route_and_summary() {
        let set = campus().unwrap();
        let route = find_route("f1_lab1", "f3_lab_a", &set);
        assert_eq!(route.len(), 2);
        assert_eq!(route[0].waypoint_ids, ["f1_wp_lab1", "f1_wp_ramp"]);
        assert_eq!(
            segment_on(&route, "f3").unwrap().waypoint_ids,
            ["f3_wp_ramp", "f3_wp_right"]
        );
        assert!(segment_on(&route, "f2").is_none());

        let summary = RouteSummary::new(&route, &set);
        assert_eq!(
            summary.to_string(),
            "1. Ground Floor: 2 waypoint(s), 6.0 m, take ramp Ramp to 2nd Floor (CSE)\n\
             2. 2nd Floor (CSE): 2 waypoint(s), 2.0 m\n\
             total: 8.0 m"
        );
    }

    #[test]
    fn unknown_room_has_no_route() {
        let set = campus().unwrap();
        assert!(find_route("f1_lab1", "f9_roof", &set).is_empty());
        assert_eq!(RouteSummary::new(&[], &set).to_string(), "no route");
    }

    #[test]
    fn every_room_pair_is_routable() {
        let set = campus().unwrap();
        let rooms = set.selectable_rooms();
        for from in &rooms {
            for to in &rooms {
                let route = find_route(&from.room.id, &to.room.id, &set);
                assert!(!route.is_empty(), "{} -> {}", from.room.id, to.room.id);
                assert_eq!(route[0].floor_id, from.floor_id);
                assert_eq!(route.last().unwrap().floor_id, to.floor_id);
                let (last, rest) = route.split_last().unwrap();
                assert!(rest.iter().all(|s| s.transition.is_some()));
                assert!(last.transition.is_none());
            }
        }
    }
}
