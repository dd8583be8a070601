//! Coordinate representations and the `Point` façade
//!
//! [`Point`] is the closed set of location variants: a Cartesian point, a
//! spherical point, or the unreachable sentinel. Every operation dispatches on
//! the variant once, and the sentinel is handled here so the converter and
//! the distance formulas only ever see concrete coordinates.

pub mod cartesian;
pub mod converter;
pub mod distance;
pub mod guard;
pub mod record;
pub mod spherical;
pub mod unreachable;

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

pub use cartesian::CartesianPoint;
pub use record::PointRecord;
pub use spherical::SphericalPoint;
pub use unreachable::UnreachablePoint;

use crate::errors::{CoordinateError, Result};

/// Displays a component plainly, or in scientific notation when plain
/// digits would run long
pub(crate) struct Component(pub(crate) f64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            write!(f, "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// The representation a point is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    /// `x, y, z` components
    Cartesian,
    /// Latitude and longitude in degrees plus a radius
    Spherical,
    /// The sentinel for a location that does not exist
    Unreachable,
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PointKind::Cartesian => "cartesian",
            PointKind::Spherical => "spherical",
            PointKind::Unreachable => "unreachable",
        })
    }
}

/// A location in any supported representation
///
/// Equality is structural within a variant: a Cartesian point never equals a
/// spherical point, even when both describe the same place. The
/// `Unreachable` variant never equals anything, itself included, and always
/// hashes to [`UNREACHABLE_HASH`](crate::constants::UNREACHABLE_HASH). `Eq`
/// is implemented so points can key hash maps; reflexivity does not hold for
/// the sentinel.
#[derive(Debug, Clone)]
pub enum Point {
    /// A canonical Cartesian point
    Cartesian(CartesianPoint),
    /// A canonical spherical point
    Spherical(SphericalPoint),
    /// The process-wide "nowhere" sentinel
    Unreachable(&'static UnreachablePoint),
}

impl Point {
    /// The unreachable sentinel
    pub fn unreachable() -> Point {
        Point::Unreachable(UnreachablePoint::instance())
    }

    /// Which representation this point is in
    pub fn kind(&self) -> PointKind {
        match self {
            Point::Cartesian(_) => PointKind::Cartesian,
            Point::Spherical(_) => PointKind::Spherical,
            Point::Unreachable(_) => PointKind::Unreachable,
        }
    }

    /// Whether this is the unreachable sentinel
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Point::Unreachable(_))
    }

    /// This point as a Cartesian point, converting if necessary
    ///
    /// # Errors
    ///
    /// `UnsupportedConversion` for the sentinel, `ConversionFailure` for
    /// degenerate inputs.
    pub fn as_cartesian(&self) -> Result<CartesianPoint> {
        match converter::convert(self, PointKind::Cartesian)? {
            Point::Cartesian(point) => Ok(point),
            other => Err(CoordinateError::InternalError(format!(
                "conversion to cartesian produced a {} point",
                other.kind()
            ))),
        }
    }

    /// This point as a spherical point, converting if necessary
    pub fn as_spherical(&self) -> Result<SphericalPoint> {
        match converter::convert(self, PointKind::Spherical)? {
            Point::Spherical(point) => Ok(point),
            other => Err(CoordinateError::InternalError(format!(
                "conversion to spherical produced a {} point",
                other.kind()
            ))),
        }
    }

    /// Euclidean distance to `other`; infinite if either side is unreachable
    pub fn distance_cartesian(&self, other: &Point) -> Result<f64> {
        if self.is_unreachable() || other.is_unreachable() {
            return Ok(f64::INFINITY);
        }
        distance::cartesian_distance(&self.as_cartesian()?, &other.as_cartesian()?)
    }

    /// Law-of-cosines distance to `other`; infinite if either side is unreachable
    pub fn distance_spherical(&self, other: &Point) -> Result<f64> {
        if self.is_unreachable() || other.is_unreachable() {
            return Ok(f64::INFINITY);
        }
        distance::spherical_distance(&self.as_spherical()?, &other.as_spherical()?)
    }

    /// Distance to `other`, defined as the Cartesian distance
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfield::{cartesian, spherical, unreachable};
    ///
    /// let here: pointfield::Point = cartesian(0.0, 0.0, -1.0).unwrap().into();
    /// let there: pointfield::Point = spherical(0.0, 0.0, 2.0).unwrap().into();
    /// assert!((there.distance(&here).unwrap() - 1.0).abs() < 1e-12);
    /// assert_eq!(here.distance(&unreachable()).unwrap(), f64::INFINITY);
    /// ```
    pub fn distance(&self, other: &Point) -> Result<f64> {
        self.distance_cartesian(other)
    }

    /// Structural equality, see the type-level documentation
    pub fn equals_value(&self, other: &Point) -> bool {
        self == other
    }

    /// Storable snapshot of this point
    pub fn to_record(&self) -> PointRecord {
        PointRecord::from(self)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Point::Cartesian(a), Point::Cartesian(b)) => a == b,
            (Point::Spherical(a), Point::Spherical(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Point::Cartesian(p) => p.hash(state),
            Point::Spherical(p) => p.hash(state),
            Point::Unreachable(p) => p.hash(state),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Cartesian(p) => write!(f, "cartesian {}", p),
            Point::Spherical(p) => write!(f, "spherical {}", p),
            Point::Unreachable(p) => write!(f, "{}", p),
        }
    }
}

impl From<CartesianPoint> for Point {
    fn from(point: CartesianPoint) -> Self {
        Point::Cartesian(point)
    }
}

impl From<SphericalPoint> for Point {
    fn from(point: SphericalPoint) -> Self {
        Point::Spherical(point)
    }
}
