//! # Cartesian Coordinate Module
//!
//! This module provides the canonical 3D Cartesian point used throughout the
//! crate.
//!
//! ## Design Philosophy
//!
//! A `CartesianPoint` is an immutable handle to a shared value. Points are
//! never built directly; the factories validate the components and then ask
//! the owning [`PointRegistry`] for the single live instance holding exactly
//! those components. Two points with the same components therefore compare
//! equal by pointer as well as by value, and the pointer check is used as the
//! fast path of `==`.
//!
//! ## Coordinate System Convention
//!
//! The axes follow the geographic convention used by the converter:
//! - **X-axis**: Toward latitude 0°, longitude 90°
//! - **Y-axis**: Toward the north pole (latitude 90°)
//! - **Z-axis**: Away from latitude 0°, longitude 0° (that meridian lies on -Z)
//!
//! ## Equality and Hashing
//!
//! Components compare by their IEEE 754 bit pattern, so `0.0` and `-0.0` are
//! different points. The hash folds the same bit patterns, keeping it
//! consistent with equality.
//!
//! ## Examples
//!
//! ```rust
//! use pointfield::PointRegistry;
//!
//! let registry = PointRegistry::new();
//! let a = registry.cartesian(1.0, 2.0, 3.0).unwrap();
//! let b = registry.cartesian(1.0, 2.0, 3.0).unwrap();
//! assert!(a.ptr_eq(&b));
//!
//! // Replacing a component yields another canonical instance
//! let c = a.with_z(4.0).unwrap();
//! assert_eq!(c.z(), 4.0);
//! assert!(c.ptr_eq(&registry.cartesian(1.0, 2.0, 4.0).unwrap()));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use nalgebra::Vector3;

use super::{converter, distance, guard, Component, SphericalPoint};
use crate::errors::Result;
use crate::registry::{self, interner::hash3, PointRegistry};

/// Cached payload behind a [`CartesianPoint`]
pub(crate) struct CartesianData {
    x: f64,
    y: f64,
    z: f64,
    registry: PointRegistry,
}

impl CartesianData {
    fn holds(&self, x: f64, y: f64, z: f64) -> bool {
        self.x.to_bits() == x.to_bits()
            && self.y.to_bits() == y.to_bits()
            && self.z.to_bits() == z.to_bits()
    }
}

/// Immutable, canonical three-dimensional Cartesian point
///
/// Cloning a `CartesianPoint` clones the handle, not the value.
#[derive(Clone)]
pub struct CartesianPoint {
    inner: Arc<CartesianData>,
}

impl CartesianPoint {
    /// Canonical point for `(x, y, z)` in the default registry
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any component is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfield::CartesianPoint;
    ///
    /// let point = CartesianPoint::create(1.0, 0.0, 0.0).unwrap();
    /// assert_eq!(point.x(), 1.0);
    /// assert!(CartesianPoint::create(f64::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn create(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::create_in(registry::global(), x, y, z)
    }

    /// Canonical point for `(x, y, z)` in `registry`
    pub fn create_in(registry: &PointRegistry, x: f64, y: f64, z: f64) -> Result<Self> {
        guard::ensure_finite(x, "x")?;
        guard::ensure_finite(y, "y")?;
        guard::ensure_finite(z, "z")?;

        let inner = registry.shared().cartesian.intern(
            hash3(x, y, z),
            |candidate| candidate.holds(x, y, z),
            || CartesianData {
                x,
                y,
                z,
                registry: registry.clone(),
            },
        )?;
        Ok(CartesianPoint { inner })
    }

    /// X-component
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    /// Y-component (toward the north pole)
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// Z-component
    pub fn z(&self) -> f64 {
        self.inner.z
    }

    /// Canonical point with the x-component replaced
    pub fn with_x(&self, x: f64) -> Result<Self> {
        Self::create_in(self.registry(), x, self.y(), self.z())
    }

    /// Canonical point with the y-component replaced
    pub fn with_y(&self, y: f64) -> Result<Self> {
        Self::create_in(self.registry(), self.x(), y, self.z())
    }

    /// Canonical point with the z-component replaced
    pub fn with_z(&self, z: f64) -> Result<Self> {
        Self::create_in(self.registry(), self.x(), self.y(), z)
    }

    /// Registry this point was canonicalized in
    pub fn registry(&self) -> &PointRegistry {
        &self.inner.registry
    }

    /// Whether both handles refer to the very same instance
    pub fn ptr_eq(&self, other: &CartesianPoint) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Hash of the three components
    ///
    /// Equal points always produce equal hash codes.
    pub fn hash_code(&self) -> i32 {
        hash3(self.x(), self.y(), self.z())
    }

    /// Euclidean distance from the origin
    ///
    /// Computed with `hypot`, so components whose squares would overflow or
    /// underflow still yield the representable magnitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfield::cartesian;
    ///
    /// let point = cartesian(3.0, 4.0, 0.0).unwrap();
    /// assert_eq!(point.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        distance::scaled_norm(&self.to_vector3())
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Canonical point holding the components of `vec`
    pub fn from_vector3(registry: &PointRegistry, vec: &Vector3<f64>) -> Result<Self> {
        Self::create_in(registry, vec.x, vec.y, vec.z)
    }

    /// Spherical representation of this point, see [`converter::to_spherical`]
    pub fn to_spherical(&self) -> Result<SphericalPoint> {
        converter::to_spherical(self)
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: &CartesianPoint) -> Result<f64> {
        distance::cartesian_distance(self, other)
    }
}

impl PartialEq for CartesianPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || other.inner.holds(self.x(), self.y(), self.z())
    }
}

impl Eq for CartesianPoint {}

impl Hash for CartesianPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Debug for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartesianPoint")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            Component(self.x()),
            Component(self.y()),
            Component(self.z())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CoordinateError;
    use std::collections::HashSet;

    #[test]
    fn test_cartesian_creation() {
        let registry = PointRegistry::new();
        let coord = registry.cartesian(1.0, 2.0, 3.0).unwrap();
        assert_eq!(coord.x(), 1.0);
        assert_eq!(coord.y(), 2.0);
        assert_eq!(coord.z(), 3.0);
    }

    #[test]
    fn test_identical_components_share_instance() {
        let registry = PointRegistry::new();
        let a = registry.cartesian(1.0, 2.0, 3.0).unwrap();
        let b = registry.cartesian(1.0, 2.0, 3.0).unwrap();
        let c = registry.cartesian(3.0, 2.0, 1.0).unwrap();

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_signed_zero_is_a_distinct_value() {
        let registry = PointRegistry::new();
        let positive = registry.cartesian(0.0, 0.0, 0.0).unwrap();
        let negative = registry.cartesian(-0.0, 0.0, 0.0).unwrap();
        assert_ne!(positive, negative);
        assert!(!positive.ptr_eq(&negative));
    }

    #[test]
    fn test_rejects_non_finite_components() {
        let registry = PointRegistry::new();
        let err = registry.cartesian(0.0, f64::INFINITY, 0.0).unwrap_err();
        match err {
            CoordinateError::InvalidArgument { name, .. } => assert_eq!(name, "y"),
            other => panic!("unexpected error {:?}", other),
        }
        // Nothing was cached for the rejected call
        assert_eq!(registry.stats().unwrap().entries, 0);
    }

    #[test]
    fn test_with_component_replacement() {
        let registry = PointRegistry::new();
        let base = registry.cartesian(1.0, 2.0, 3.0).unwrap();

        let moved = base.with_x(10.0).unwrap();
        assert_eq!((moved.x(), moved.y(), moved.z()), (10.0, 2.0, 3.0));
        assert!(moved.ptr_eq(&registry.cartesian(10.0, 2.0, 3.0).unwrap()));

        let moved = base.with_y(20.0).unwrap();
        assert_eq!((moved.x(), moved.y(), moved.z()), (1.0, 20.0, 3.0));

        let moved = base.with_z(30.0).unwrap();
        assert_eq!((moved.x(), moved.y(), moved.z()), (1.0, 2.0, 30.0));

        // Replacing with the same value returns the original instance
        assert!(base.with_x(1.0).unwrap().ptr_eq(&base));
        assert!(base.with_z(f64::NAN).is_err());
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let registry = PointRegistry::new();
        let other = PointRegistry::new();
        let a = registry.cartesian(1.5, -2.5, 3.25).unwrap();
        let b = other.cartesian(1.5, -2.5, 3.25).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(b);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&a));
    }

    #[test]
    fn test_magnitude_calculation() {
        let registry = PointRegistry::new();
        assert_eq!(registry.cartesian(3.0, 4.0, 0.0).unwrap().magnitude(), 5.0);
        assert_eq!(registry.cartesian(1.0, 0.0, 0.0).unwrap().magnitude(), 1.0);
        assert_eq!(registry.cartesian(0.0, 0.0, 0.0).unwrap().magnitude(), 0.0);
    }

    #[test]
    fn test_magnitude_at_extreme_scales() {
        let registry = PointRegistry::new();
        let huge = registry.cartesian(3e300, 4e300, 0.0).unwrap();
        assert!((huge.magnitude() / 5e300 - 1.0).abs() < 1e-15);

        let tiny = registry.cartesian(0.0, 3e-200, -4e-200).unwrap();
        assert!((tiny.magnitude() / 5e-200 - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_vector3_conversions() {
        let registry = PointRegistry::new();
        let coord = registry.cartesian(1.0, 2.0, 3.0).unwrap();
        let vec = coord.to_vector3();

        assert_eq!(vec.x, 1.0);
        assert_eq!(vec.y, 2.0);
        assert_eq!(vec.z, 3.0);

        let coord_back = CartesianPoint::from_vector3(&registry, &vec).unwrap();
        assert!(coord.ptr_eq(&coord_back));
    }

    #[test]
    fn test_precision_preservation() {
        let registry = PointRegistry::new();
        let precise_coord = registry
            .cartesian(0.123456789012345, 0.987654321098765, 0.555666777888999)
            .unwrap();

        assert_eq!(precise_coord.x(), 0.123456789012345);
        assert_eq!(precise_coord.y(), 0.987654321098765);
        assert_eq!(precise_coord.z(), 0.555666777888999);
    }

    #[test]
    fn test_display_and_debug() {
        let registry = PointRegistry::new();
        let coord = registry.cartesian(1.0, -2.5, 0.0).unwrap();
        assert_eq!(coord.to_string(), "(1, -2.5, 0)");
        assert_eq!(
            format!("{:?}", coord),
            "CartesianPoint { x: 1.0, y: -2.5, z: 0.0 }"
        );
    }

    #[test]
    fn test_display_extreme_components() {
        let registry = PointRegistry::new();
        let coord = registry.cartesian(1e300, -2.5e-200, 0.0).unwrap();
        assert_eq!(coord.to_string(), "(1e300, -2.5e-200, 0)");
    }
}
