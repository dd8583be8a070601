//! Conversion between the Cartesian and spherical representations
//!
//! The mapping follows the geographic convention: latitude is measured from
//! the equator, longitude from the reference meridian, which lies along -Z.
//!
//! ```text
//! x =  r · cos(lat) · sin(lon)        r   = √(x² + y² + z²)
//! y =  r · sin(lat)                   lat = asin(y / r)
//! z = -r · cos(lat) · cos(lon)        lon = atan2(x, -z)
//! ```
//!
//! Converted points are canonicalized in the registry of the source point.

use super::{CartesianPoint, Point, PointKind, SphericalPoint};
use crate::constants::{LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN};
use crate::errors::{CoordinateError, Result};

/// Converts a spherical point to its Cartesian representation
///
/// # Examples
///
/// ```rust
/// use pointfield::{spherical, to_cartesian};
///
/// let point = to_cartesian(&spherical(0.0, 0.0, 1.0).unwrap()).unwrap();
/// assert!(point.x().abs() < 1e-15);
/// assert!(point.y().abs() < 1e-15);
/// assert!((point.z() + 1.0).abs() < 1e-15);
/// ```
pub fn to_cartesian(point: &SphericalPoint) -> Result<CartesianPoint> {
    let radius = point.radius();
    let (sin_lat, cos_lat) = point.latitude_radians().sin_cos();
    let (sin_lon, cos_lon) = point.longitude_radians().sin_cos();

    let x = radius * cos_lat * sin_lon;
    let y = radius * sin_lat;
    let z = -radius * cos_lat * cos_lon;

    CartesianPoint::create_in(point.registry(), x, y, z)
}

/// Converts a Cartesian point to its spherical representation
///
/// # Errors
///
/// `ConversionFailure` for the origin, where latitude is undefined, and for
/// points so far out that their radius exceeds `f64::MAX`.
pub fn to_spherical(point: &CartesianPoint) -> Result<SphericalPoint> {
    let radius = point.magnitude();
    if radius == 0.0 {
        return Err(CoordinateError::ConversionFailure(format!(
            "{} has zero radius, latitude is undefined",
            point
        )));
    }
    if !radius.is_finite() {
        return Err(CoordinateError::ConversionFailure(format!(
            "radius of {} overflows",
            point
        )));
    }

    let latitude = (point.y() / radius)
        .clamp(-1.0, 1.0)
        .asin()
        .to_degrees()
        .clamp(LATITUDE_MIN, LATITUDE_MAX);
    let longitude = point
        .x()
        .atan2(-point.z())
        .to_degrees()
        .clamp(LONGITUDE_MIN, LONGITUDE_MAX);

    SphericalPoint::create_in(point.registry(), latitude, longitude, radius)
}

/// Converts `point` to the representation named by `target`
///
/// A point already of the requested kind is returned as-is (the same shared
/// instance). The unreachable sentinel cannot be converted to anything, and
/// nothing can be converted to it.
pub fn convert(point: &Point, target: PointKind) -> Result<Point> {
    match (point, target) {
        (Point::Unreachable(_), _) | (_, PointKind::Unreachable) => {
            log::warn!(
                "Unsupported conversion was tried ({} => {})",
                point.kind(),
                target
            );
            Err(CoordinateError::UnsupportedConversion {
                from: point.kind(),
                to: target,
            })
        }
        (Point::Cartesian(_), PointKind::Cartesian) | (Point::Spherical(_), PointKind::Spherical) => {
            Ok(point.clone())
        }
        (Point::Cartesian(cartesian), PointKind::Spherical) => {
            Ok(Point::Spherical(to_spherical(cartesian)?))
        }
        (Point::Spherical(spherical), PointKind::Cartesian) => {
            Ok(Point::Cartesian(to_cartesian(spherical)?))
        }
    }
}
