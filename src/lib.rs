//! Pointfield: canonical coordinate values for locating things in space
//!
//! This crate provides immutable Cartesian and spherical points, conversion
//! between the two representations, straight-line distance calculations and
//! an "unreachable" sentinel for locations that are not known. Points are
//! canonicalized: creating the same coordinates twice through the same
//! [`PointRegistry`] yields the same shared instance.
//!
//! ```rust
//! use pointfield::{cartesian, spherical, unreachable, Point};
//!
//! let a = cartesian(1.0, 2.0, 3.0).unwrap();
//! let b = cartesian(1.0, 2.0, 3.0).unwrap();
//! assert!(a.ptr_eq(&b));
//!
//! let home: Point = spherical(48.137, 11.575, 6371.0).unwrap().into();
//! assert_eq!(home.distance(&unreachable()).unwrap(), f64::INFINITY);
//! ```

pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod location;
pub mod registry;

// Re-export commonly used types
pub use coordinates::converter::{convert, to_cartesian, to_spherical};
pub use coordinates::distance::{cartesian_distance, spherical_distance};
pub use coordinates::{
    CartesianPoint, Point, PointKind, PointRecord, SphericalPoint, UnreachablePoint,
};
pub use errors::{CoordinateError, Result};
pub use location::Location;
pub use registry::{PointRegistry, RegistryStats};

/// Canonical Cartesian point in the default registry
pub fn cartesian(x: f64, y: f64, z: f64) -> Result<CartesianPoint> {
    CartesianPoint::create(x, y, z)
}

/// Canonical spherical point in the default registry
pub fn spherical(latitude: f64, longitude: f64, radius: f64) -> Result<SphericalPoint> {
    SphericalPoint::create(latitude, longitude, radius)
}

/// The unreachable sentinel as a [`Point`]
pub fn unreachable() -> Point {
    Point::unreachable()
}
