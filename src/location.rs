//! Location records
//!
//! A `Location` is what consumers such as photo records hold on to: a single
//! [`Point`] that may be moved. A fresh location is nowhere until a point is
//! assigned.

use crate::coordinates::{Point, PointRecord};
use crate::errors::Result;

/// The position of something, possibly unknown
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    point: Point,
}

impl Location {
    /// A location at `point`
    pub fn new(point: impl Into<Point>) -> Self {
        Self {
            point: point.into(),
        }
    }

    /// The current point, possibly the unreachable sentinel
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Move the location; use [`Point::unreachable`] to place it nowhere
    pub fn set_point(&mut self, point: impl Into<Point>) {
        self.point = point.into();
    }

    /// Whether a real position has been assigned
    pub fn is_known(&self) -> bool {
        !self.point.is_unreachable()
    }

    /// Distance between the two locations' points, infinite if either is unknown
    pub fn distance_to(&self, other: &Location) -> Result<f64> {
        self.point.distance(&other.point)
    }

    /// Storable snapshot of the current point
    pub fn to_record(&self) -> PointRecord {
        self.point.to_record()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(Point::unreachable())
    }
}
