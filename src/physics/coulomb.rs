use std::fmt;

use crate::geometry::point::Point;

/// Electrostatic constant. The model works with unit charges on a unit
/// scale, so the physical value (8.9875e9 N·m²/C²) is replaced by 1.
pub const COULOMB_K: f64 = 1.0;

/// Failure conditions of the force law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// Both charges occupy the same position, so the inverse-square
    /// denominator is zero and the force has no finite value.
    DegenerateGeometry { at: Point },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::DegenerateGeometry { at } => {
                write!(f, "degenerate geometry: both charges at ({}, {})", at.x, at.y)
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

/// Magnitude of the Coulomb force between charges `q1` at `p1` and `q2`
/// at `p2`: `k * |q1 * q2| / d²`.
///
/// Coincident points are reported as `DegenerateGeometry` rather than an
/// infinity sentinel; callers must treat that as a terminal condition.
pub fn coulomb_force(q1: f64, q2: f64, p1: &Point, p2: &Point) -> Result<f64, PhysicsError> {
    let r = p1.distance(p2);
    if r == 0.0 {
        return Err(PhysicsError::DegenerateGeometry { at: *p1 });
    }
    Ok(COULOMB_K * (q1 * q2).abs() / (r * r))
}
