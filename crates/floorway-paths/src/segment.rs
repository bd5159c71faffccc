//! Path segmenter: a unified path cut into one run per floor.

use floorway_core::{ConnectorKind, Point};

use crate::unified::UnifiedGraph;

/// How a route leaves one floor for the next.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub kind: ConnectorKind,
    pub name: String,
    pub from_floor: String,
    pub to_floor: String,
}

/// The part of a route lying on one floor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSegment {
    pub floor_id: String,
    pub waypoint_ids: Vec<String>,
    pub positions: Vec<Point>,
    /// Set on every segment but the last when a connector was identified.
    pub transition: Option<Transition>,
}

impl PathSegment {
    fn start(floor_id: &str) -> Self {
        Self {
            floor_id: floor_id.to_owned(),
            waypoint_ids: Vec::new(),
            positions: Vec::new(),
            transition: None,
        }
    }

    /// Walking distance along the segment's waypoints.
    pub fn length(&self) -> f64 {
        self.positions
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}

/// Split a unified path into maximal same-floor runs.
///
/// When the floor changes, the connector with stops at both the last
/// waypoint of the old floor and the first of the new one is recorded as the
/// old segment's [`Transition`]. An empty path, or one naming a waypoint the
/// graph does not know, yields no segments.
pub fn segment_path<S: AsRef<str>>(path: &[S], graph: &UnifiedGraph<'_>) -> Vec<PathSegment> {
    let mut segments: Vec<PathSegment> = Vec::new();
    let mut prev: Option<&str> = None;

    for id in path {
        let id = id.as_ref();
        let Some(node) = graph.node_by_id(id) else {
            log::warn!("path names unknown waypoint '{id}'");
            return Vec::new();
        };

        let same_floor = segments
            .last()
            .is_some_and(|s| s.floor_id == node.floor_id);
        if !same_floor {
            if let (Some(last), Some(prev_id)) = (segments.last_mut(), prev) {
                last.transition = graph.connector_between(prev_id, id).map(|c| Transition {
                    kind: c.kind,
                    name: c.name.clone(),
                    from_floor: last.floor_id.clone(),
                    to_floor: node.floor_id.to_owned(),
                });
            }
            segments.push(PathSegment::start(node.floor_id));
        }

        if let Some(seg) = segments.last_mut() {
            seg.waypoint_ids.push(id.to_owned());
            seg.positions.push(node.position);
        }
        prev = Some(id);
    }
    segments
}

/// The segment to draw on `floor_id`, if the route touches that floor.
pub fn segment_on<'s>(segments: &'s [PathSegment], floor_id: &str) -> Option<&'s PathSegment> {
    segments.iter().find(|s| s.floor_id == floor_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostModel;
    use crate::unified::tests::tower;

    #[test]
    fn empty_path_has_no_segments() {
        let set = tower(5.0, 10.0);
        let g = UnifiedGraph::build(&set);
        let path: [&str; 0] = [];
        assert!(segment_path(&path, &g).is_empty());
    }

    #[test]
    fn single_floor_is_one_segment() {
        let set = tower(5.0, 10.0);
        let g = UnifiedGraph::build(&set);
        let segs = segment_path(&["f2_wp_lift", "f2_wp_mid", "f2_wp_stairs"], &g);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].floor_id, "f2");
        assert_eq!(segs[0].waypoint_ids, ["f2_wp_lift", "f2_wp_mid", "f2_wp_stairs"]);
        assert_eq!(segs[0].positions[2], Point::new(24.0, 0.0));
        assert_eq!(segs[0].length(), 48.0);
        assert_eq!(segs[0].transition, None);
    }

    #[test]
    fn transition_is_attached_to_the_floor_being_left() {
        let set = tower(5.0, 10.0);
        let g = UnifiedGraph::build(&set);
        let path = g.find_path("f1_wp_mid", "f3_wp_mid", &CostModel::default());
        let segs = segment_path(&path, &g);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].floor_id, "f1");
        assert_eq!(segs[1].floor_id, "f3");
        let t = segs[0].transition.as_ref().unwrap();
        assert_eq!(t.kind, ConnectorKind::Lift);
        assert_eq!(t.name, "Main Lift");
        assert_eq!(t.from_floor, "f1");
        assert_eq!(t.to_floor, "f3");
        assert_eq!(segs[1].transition, None);
    }

    #[test]
    fn unmatched_floor_change_has_no_transition() {
        let set = tower(5.0, 10.0);
        let g = UnifiedGraph::build(&set);
        let segs = segment_path(&["f1_wp_mid", "f2_wp_mid", "f2_wp_lift"], &g);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].transition, None);
        assert_eq!(segs[1].waypoint_ids, ["f2_wp_mid", "f2_wp_lift"]);
    }

    #[test]
    fn unknown_waypoint_drops_the_route() {
        let set = tower(5.0, 10.0);
        let g = UnifiedGraph::build(&set);
        assert!(segment_path(&["f1_wp_mid", "f1_wp_attic"], &g).is_empty());
    }

    #[test]
    fn revisiting_a_floor_starts_a_new_segment() {
        let set = tower(5.0, 10.0);
        let g = UnifiedGraph::build(&set);
        let path = ["f1_wp_lift", "f2_wp_lift", "f1_wp_lift"];
        let segs = segment_path(&path, &g);
        let floors: Vec<_> = segs.iter().map(|s| s.floor_id.as_str()).collect();
        assert_eq!(floors, ["f1", "f2", "f1"]);
        assert_eq!(segment_on(&segs, "f1").unwrap().waypoint_ids, ["f1_wp_lift"]);
        assert!(segment_on(&segs, "f3").is_none());
        assert_eq!(segs[1].transition.as_ref().unwrap().to_floor, "f1");
    }
}
