use crate::geometry::point::Point;

/// Moves `target` along the line through `source` and `target` by
/// `step * error`: outward when the error is positive, toward `source`
/// when it is negative.
///
/// This is the model's whole learning rule. It is driven by the signed
/// raw error directly, not by a loss gradient.
///
/// When the two points coincide there is no direction to move along;
/// `target` is returned unchanged. The trainer treats coincident points
/// as terminal before ever calling this, so the no-op is only reachable
/// through direct use.
pub fn update_target(source: &Point, target: &Point, error: f64, step: f64) -> Point {
    let d = source.distance(target);
    if d == 0.0 {
        return *target;
    }
    let dir = Point::new((target.x - source.x) / d, (target.y - source.y) / d);
    *target + dir * (step * error)
}
