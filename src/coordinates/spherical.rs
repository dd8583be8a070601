//! Canonical spherical points
//!
//! A `SphericalPoint` stores latitude and longitude in degrees together with
//! a radius. Latitude is measured from the equator, longitude from the
//! reference meridian. Like [`CartesianPoint`], instances are obtained from a
//! [`PointRegistry`] and are shared between all callers asking for the same
//! components.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{converter, distance, guard, CartesianPoint, Component};
use crate::constants::{
    LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN, RADIUS_MAX, RADIUS_MIN,
};
use crate::errors::Result;
use crate::registry::{self, interner::hash3, PointRegistry};

pub(crate) struct SphericalData {
    latitude: f64,
    longitude: f64,
    radius: f64,
    registry: PointRegistry,
}

impl SphericalData {
    fn holds(&self, latitude: f64, longitude: f64, radius: f64) -> bool {
        self.latitude.to_bits() == latitude.to_bits()
            && self.longitude.to_bits() == longitude.to_bits()
            && self.radius.to_bits() == radius.to_bits()
    }
}

/// Immutable, canonical point given by latitude, longitude and radius
#[derive(Clone)]
pub struct SphericalPoint {
    inner: Arc<SphericalData>,
}

impl SphericalPoint {
    /// Canonical point in the default registry
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless latitude ∈ [-90, 90], longitude ∈ [-180, 180]
    /// and radius ∈ [0, ∞), all finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfield::SphericalPoint;
    ///
    /// let pole = SphericalPoint::create(90.0, 180.0, 0.0).unwrap();
    /// assert_eq!(pole.latitude(), 90.0);
    /// assert!(SphericalPoint::create(91.0, 0.0, 1.0).is_err());
    /// ```
    pub fn create(latitude: f64, longitude: f64, radius: f64) -> Result<Self> {
        Self::create_in(registry::global(), latitude, longitude, radius)
    }

    /// Canonical point in `registry`
    pub fn create_in(
        registry: &PointRegistry,
        latitude: f64,
        longitude: f64,
        radius: f64,
    ) -> Result<Self> {
        guard::ensure_in_range(latitude, LATITUDE_MIN, LATITUDE_MAX, "latitude")?;
        guard::ensure_in_range(longitude, LONGITUDE_MIN, LONGITUDE_MAX, "longitude")?;
        guard::ensure_in_range(radius, RADIUS_MIN, RADIUS_MAX, "radius")?;

        let inner = registry.shared().spherical.intern(
            hash3(latitude, longitude, radius),
            |candidate| candidate.holds(latitude, longitude, radius),
            || SphericalData {
                latitude,
                longitude,
                radius,
                registry: registry.clone(),
            },
        )?;
        Ok(SphericalPoint { inner })
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.inner.latitude
    }

    /// Longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.inner.longitude
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        self.inner.radius
    }

    /// Canonical point with the latitude replaced
    pub fn with_latitude(&self, latitude: f64) -> Result<Self> {
        Self::create_in(self.registry(), latitude, self.longitude(), self.radius())
    }

    /// Canonical point with the longitude replaced
    pub fn with_longitude(&self, longitude: f64) -> Result<Self> {
        Self::create_in(self.registry(), self.latitude(), longitude, self.radius())
    }

    /// Canonical point with the radius replaced
    pub fn with_radius(&self, radius: f64) -> Result<Self> {
        Self::create_in(self.registry(), self.latitude(), self.longitude(), radius)
    }

    /// Registry this point was canonicalized in
    pub fn registry(&self) -> &PointRegistry {
        &self.inner.registry
    }

    /// Whether both handles refer to the very same instance
    pub fn ptr_eq(&self, other: &SphericalPoint) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Hash of latitude, longitude and radius
    pub fn hash_code(&self) -> i32 {
        hash3(self.latitude(), self.longitude(), self.radius())
    }

    /// Latitude in radians
    pub fn latitude_radians(&self) -> f64 {
        self.latitude().to_radians()
    }

    /// Longitude in radians
    pub fn longitude_radians(&self) -> f64 {
        self.longitude().to_radians()
    }

    /// Cartesian representation of this point, see [`converter::to_cartesian`]
    pub fn to_cartesian(&self) -> Result<CartesianPoint> {
        converter::to_cartesian(self)
    }

    /// Straight-line distance to `other`, computed without leaving polar form
    pub fn distance_to(&self, other: &SphericalPoint) -> Result<f64> {
        distance::spherical_distance(self, other)
    }
}

impl PartialEq for SphericalPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || other
                .inner
                .holds(self.latitude(), self.longitude(), self.radius())
    }
}

impl Eq for SphericalPoint {}

impl Hash for SphericalPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Debug for SphericalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SphericalPoint")
            .field("latitude", &self.latitude())
            .field("longitude", &self.longitude())
            .field("radius", &self.radius())
            .finish()
    }
}

impl fmt::Display for SphericalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(lat {}°, lon {}°, r {})",
            Component(self.latitude()),
            Component(self.longitude()),
            Component(self.radius())
        )
    }
}
