use floorway_core::Point;

/// Straight-line distance on one floor.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Distance between points on (possibly) different floors.
///
/// The level difference is scaled by `floor_scale` and treated as a third
/// axis before taking the Euclidean norm.
#[inline]
pub fn stacked(a: Point, a_level: i32, b: Point, b_level: i32, floor_scale: f64) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let df = f64::from(a_level - b_level) * floor_scale;
    (dx * dx + dy * dy + df * df).sqrt()
}
