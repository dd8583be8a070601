//! Straight-line distances between points
//!
//! Both formulas measure the chord through space, not the arc along a
//! sphere's surface. Both are scaled so that intermediate squares cannot
//! overflow or underflow; a non-finite result only arises when the distance
//! itself exceeds `f64::MAX` and is reported as an `InternalError`.

use nalgebra::Vector3;

use super::{CartesianPoint, SphericalPoint};
use crate::errors::{CoordinateError, Result};

fn finite_distance(distance: f64, what: &str) -> Result<f64> {
    if distance.is_finite() {
        Ok(distance)
    } else {
        Err(CoordinateError::InternalError(format!(
            "{} distance calculation produced {}",
            what, distance
        )))
    }
}

/// Euclidean norm of `vec` without squaring its components directly
pub(crate) fn scaled_norm(vec: &Vector3<f64>) -> f64 {
    vec.x.hypot(vec.y).hypot(vec.z)
}

/// Euclidean distance between two Cartesian points
///
/// # Examples
///
/// ```rust
/// use pointfield::{cartesian, cartesian_distance};
///
/// let a = cartesian(1.0, 1.0, 1.0).unwrap();
/// let b = cartesian(10.0, 10.0, 10.0).unwrap();
/// let d = cartesian_distance(&a, &b).unwrap();
/// assert!((d - 15.588457268119896).abs() < 1e-12);
/// ```
pub fn cartesian_distance(start: &CartesianPoint, end: &CartesianPoint) -> Result<f64> {
    let distance = scaled_norm(&(start.to_vector3() - end.to_vector3()));
    finite_distance(distance, "cartesian")
}

/// Distance between two spherical points by the law of cosines
///
/// ```text
/// d = √(r1² + r2² − 2·r1·r2·[cos(la1)·cos(la2)·cos(lo1 − lo2) + sin(la1)·sin(la2)])
/// ```
///
/// Evaluated as `rmax · √(1 + q² − 2q·cosθ)` with `q = rmin / rmax`, which
/// keeps every intermediate within `[0, 4]`.
pub fn spherical_distance(start: &SphericalPoint, end: &SphericalPoint) -> Result<f64> {
    let r1 = start.radius();
    let r2 = end.radius();
    let (sin_la1, cos_la1) = start.latitude_radians().sin_cos();
    let (sin_la2, cos_la2) = end.latitude_radians().sin_cos();
    let delta_lon = start.longitude_radians() - end.longitude_radians();

    let cos_angle = cos_la1 * cos_la2 * delta_lon.cos() + sin_la1 * sin_la2;

    let (near, far) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
    if far == 0.0 {
        return Ok(0.0);
    }
    let ratio = near / far;
    let radicand = 1.0 + ratio * ratio - 2.0 * ratio * cos_angle;
    // Coincident points can round to a tiny negative radicand; NaN stays NaN
    let radicand = if radicand < 0.0 { 0.0 } else { radicand };

    finite_distance(far * radicand.sqrt(), "spherical")
}
