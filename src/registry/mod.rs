//! Canonicalization context for coordinate points
//!
//! A [`PointRegistry`] owns one weakly-referencing cache per concrete point
//! kind. Creating a point through a registry returns the single live instance
//! for that exact set of components, so value-equal points created through
//! the same registry are also pointer-equal.
//!
//! Points keep a handle to the registry that created them, which lets derived
//! points (`with_x`, conversions) land in the same cache. The registry never
//! keeps points alive; dropping the last handle to a point makes its entry
//! stale, and stale entries are pruned lazily.
//!
//! The crate-level convenience constructors use a lazily created default
//! registry, see [`global`]. Tests and embedders that want isolation create
//! their own with [`PointRegistry::new`].
//!
//! ```rust
//! use pointfield::PointRegistry;
//!
//! let registry = PointRegistry::new();
//! let a = registry.cartesian(1.0, 2.0, 3.0).unwrap();
//! let b = registry.cartesian(1.0, 2.0, 3.0).unwrap();
//! assert!(a.ptr_eq(&b));
//! ```

pub(crate) mod interner;

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::coordinates::cartesian::{CartesianData, CartesianPoint};
use crate::coordinates::record::PointRecord;
use crate::coordinates::spherical::{SphericalData, SphericalPoint};
use crate::coordinates::Point;
use crate::errors::Result;
use interner::Interner;

/// Default number of hash buckets reserved per cache
pub const DEFAULT_CAPACITY: usize = 64;

pub(crate) struct RegistryShared {
    pub(crate) cartesian: Interner<CartesianData>,
    pub(crate) spherical: Interner<SphericalData>,
}

/// Process-wide or scoped context that canonicalizes point instances
#[derive(Clone)]
pub struct PointRegistry {
    shared: Arc<RegistryShared>,
}

/// Snapshot of the cache contents of a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Cartesian instances still referenced by a caller
    pub cartesian_live: usize,
    /// Spherical instances still referenced by a caller
    pub spherical_live: usize,
    /// Cache entries held in total, including stale ones not yet pruned
    pub entries: usize,
}

lazy_static! {
    static ref GLOBAL_REGISTRY: PointRegistry = {
        log::debug!("Creating default point registry");
        PointRegistry::new()
    };
}

/// The default registry used by the crate-level constructors
pub fn global() -> &'static PointRegistry {
    &GLOBAL_REGISTRY
}

impl PointRegistry {
    /// Create an empty registry with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty registry reserving `buckets` hash buckets per cache
    pub fn with_capacity(buckets: usize) -> Self {
        PointRegistry {
            shared: Arc::new(RegistryShared {
                cartesian: Interner::with_capacity("cartesian", buckets),
                spherical: Interner::with_capacity("spherical", buckets),
            }),
        }
    }

    pub(crate) fn shared(&self) -> &RegistryShared {
        &self.shared
    }

    /// Canonical Cartesian point for `(x, y, z)` in this registry
    pub fn cartesian(&self, x: f64, y: f64, z: f64) -> Result<CartesianPoint> {
        CartesianPoint::create_in(self, x, y, z)
    }

    /// Canonical spherical point for `(latitude, longitude, radius)` in this registry
    pub fn spherical(&self, latitude: f64, longitude: f64, radius: f64) -> Result<SphericalPoint> {
        SphericalPoint::create_in(self, latitude, longitude, radius)
    }

    /// The shared unreachable sentinel
    ///
    /// The sentinel is process-wide; every registry returns the same one.
    pub fn unreachable(&self) -> Point {
        Point::unreachable()
    }

    /// Rebuild a point from a stored record, validating and canonicalizing it
    pub fn restore(&self, record: &PointRecord) -> Result<Point> {
        Ok(match *record {
            PointRecord::Cartesian { x, y, z } => self.cartesian(x, y, z)?.into(),
            PointRecord::Spherical {
                latitude,
                longitude,
                radius,
            } => self.spherical(latitude, longitude, radius)?.into(),
            PointRecord::Unreachable => Point::unreachable(),
        })
    }

    /// Remove every stale cache entry, returning how many were removed
    pub fn purge(&self) -> Result<usize> {
        Ok(self.shared.cartesian.purge()? + self.shared.spherical.purge()?)
    }

    /// Current cache statistics
    pub fn stats(&self) -> Result<RegistryStats> {
        Ok(RegistryStats {
            cartesian_live: self.shared.cartesian.live_count()?,
            spherical_live: self.shared.spherical.live_count()?,
            entries: self.shared.cartesian.entry_count()? + self.shared.spherical.entry_count()?,
        })
    }

    /// Whether two handles refer to the same registry
    pub fn same_registry(&self, other: &PointRegistry) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Default for PointRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PointRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointRegistry")
            .field("at", &Arc::as_ptr(&self.shared))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registries_are_isolated() {
        let first = PointRegistry::new();
        let second = PointRegistry::new();

        let a = first.cartesian(1.0, 2.0, 3.0).unwrap();
        let b = second.cartesian(1.0, 2.0, 3.0).unwrap();

        // Equal by value, distinct instances
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert!(!first.same_registry(&second));
    }

    #[test]
    fn test_stats_track_live_instances() {
        let registry = PointRegistry::with_capacity(8);
        let a = registry.cartesian(1.0, 2.0, 3.0).unwrap();
        let b = registry.spherical(10.0, 20.0, 30.0).unwrap();

        let stats = registry.stats().unwrap();
        assert_eq!(stats.cartesian_live, 1);
        assert_eq!(stats.spherical_live, 1);
        assert_eq!(stats.entries, 2);

        drop(a);
        let stats = registry.stats().unwrap();
        assert_eq!(stats.cartesian_live, 0);
        assert_eq!(stats.entries, 2);

        assert_eq!(registry.purge().unwrap(), 1);
        let stats = registry.stats().unwrap();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.spherical_live, 1);
        drop(b);
    }

    #[test]
    fn test_points_outlive_registry_handle() {
        let registry = PointRegistry::new();
        let point = registry.cartesian(4.0, 5.0, 6.0).unwrap();
        drop(registry);

        // The point keeps its registry alive for derived points
        let moved = point.with_x(7.0).unwrap();
        assert_eq!(moved.x(), 7.0);
        assert!(moved.registry().same_registry(point.registry()));
    }

    #[test]
    fn test_global_registry_is_shared() {
        assert!(global().same_registry(global()));
        let a = global().cartesian(0.25, 0.5, 0.75).unwrap();
        let b = crate::cartesian(0.25, 0.5, 0.75).unwrap();
        assert!(a.ptr_eq(&b));
    }
}
