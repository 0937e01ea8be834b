use rand::prelude::*;
use serde::{Serialize, Deserialize};
use std::ops::{Add, Sub, Mul};

/// A position in the 2D plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Euclidean distance to `other`. Non-negative; zero iff the points
    /// are equal.
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// A uniformly random point inside the square
    /// `[-half_extent, half_extent] x [-half_extent, half_extent]`.
    pub fn random_in(half_extent: f64) -> Point {
        let mut rng = rand::thread_rng();
        Point {
            x: (rng.gen::<f64>() * 2.0 - 1.0) * half_extent,
            y: (rng.gen::<f64>() * 2.0 - 1.0) * half_extent,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Self::Output {
        Point { x: self.x * rhs, y: self.y * rhs }
    }
}
