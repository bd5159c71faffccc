//! Tuning constants for floor-change costs.

/// Cost parameters shared by the single-floor and multi-floor searches.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostModel {
    /// Added to a single-floor step whose endpoints carry different floor tags.
    pub floor_penalty: f64,
    /// Distance one level apart counts for in the multi-floor metric.
    pub floor_scale: f64,
    /// Cross-floor cost used when no connector joins the two waypoints.
    pub fallback_connector_cost: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            floor_penalty: 30.0,
            floor_scale: 15.0,
            fallback_connector_cost: 20.0,
        }
    }
}
