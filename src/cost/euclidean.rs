//! Planar Euclidean distance.

use super::CostModel;
use std::convert::Infallible;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Straight-line distance between [`Point`]s. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl CostModel for Euclidean {
    type Item = Point;
    type Error = Infallible;

    fn pairwise_cost(&self, a: &Point, b: &Point) -> Result<f64, Infallible> {
        Ok(a.distance_to(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_3_4_5() {
        let d = Euclidean
            .pairwise_cost(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0))
            .unwrap();
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_square_tour() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        assert!((Euclidean.total_cost(&square).unwrap() - 4.0).abs() < 1e-12);

        // Crossing tour: two sides plus two diagonals.
        let crossed = [square[0], square[2], square[1], square[3]];
        let expected = 2.0 + 2.0 * 2f64.sqrt();
        assert!((Euclidean.total_cost(&crossed).unwrap() - expected).abs() < 1e-12);
    }
}
