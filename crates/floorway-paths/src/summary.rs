//! Human-readable digest of a computed route.

use std::fmt;

use floorway_core::FloorSet;

use crate::segment::{PathSegment, Transition};

/// One floor of a route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteStep {
    pub floor_id: String,
    pub label: String,
    pub waypoints: usize,
    pub length: f64,
    pub transition: Option<Transition>,
    /// Label of the floor the transition leads to.
    pub next_label: Option<String>,
}

/// Per-floor breakdown of a route plus its total walking length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteSummary {
    pub steps: Vec<RouteStep>,
    pub total_length: f64,
}

impl RouteSummary {
    pub fn new(segments: &[PathSegment], floors: &FloorSet) -> Self {
        let steps: Vec<RouteStep> = segments
            .iter()
            .map(|seg| RouteStep {
                floor_id: seg.floor_id.clone(),
                label: floors.label(&seg.floor_id).to_owned(),
                waypoints: seg.waypoint_ids.len(),
                length: seg.length(),
                transition: seg.transition.clone(),
                next_label: seg
                    .transition
                    .as_ref()
                    .map(|t| floors.label(&t.to_floor).to_owned()),
            })
            .collect();
        let total_length = steps.iter().map(|s| s.length).sum();
        Self {
            steps,
            total_length,
        }
    }

    /// True when there is no route to describe.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of floor changes along the route.
    pub fn floor_changes(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

impl fmt::Display for RouteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} waypoint(s), {:.1} m",
            self.label, self.waypoints, self.length
        )?;
        if let (Some(t), Some(next)) = (&self.transition, &self.next_label) {
            write!(f, ", take {} {} to {}", t.kind, t.name, next)?;
        }
        Ok(())
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no route");
        }
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {step}", i + 1)?;
        }
        write!(f, "total: {:.1} m", self.total_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostModel;
    use crate::segment::segment_path;
    use crate::unified::UnifiedGraph;
    use crate::unified::tests::tower;

    #[test]
    fn summarises_each_floor() {
        let mut set = tower(5.0, 10.0);
        set.floors[2].label = Some("Roof Lab".into());
        let g = UnifiedGraph::build(&set);
        let path = g.find_path("f1_wp_mid", "f3_wp_mid", &CostModel::default());
        let segs = segment_path(&path, &g);
        let summary = RouteSummary::new(&segs, &set);

        assert_eq!(summary.steps.len(), 2);
        assert_eq!(summary.floor_changes(), 1);
        assert_eq!(summary.steps[0].label, "Floor 1");
        assert_eq!(summary.steps[0].next_label.as_deref(), Some("Roof Lab"));
        assert_eq!(summary.steps[1].waypoints, 2);
        assert_eq!(summary.total_length, 48.0);
        assert_eq!(
            summary.to_string(),
            "1. Floor 1: 2 waypoint(s), 24.0 m, take lift Main Lift to Roof Lab\n\
             2. Roof Lab: 2 waypoint(s), 24.0 m\n\
             total: 48.0 m"
        );
    }

    #[test]
    fn empty_route() {
        let set = tower(5.0, 10.0);
        let summary = RouteSummary::new(&[], &set);
        assert!(summary.is_empty());
        assert_eq!(summary.floor_changes(), 0);
        assert_eq!(summary.to_string(), "no route");
    }
}
