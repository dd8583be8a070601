//! Plain snapshots of points for storage by consumers
//!
//! Points themselves are registry-bound handles and do not serialize. A
//! `PointRecord` carries only the raw components; it is turned back into a
//! canonical point through [`PointRegistry::restore`](crate::PointRegistry::restore),
//! which validates it again.

use serde::{Deserialize, Serialize};

use super::Point;

/// Serializable description of a [`Point`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointRecord {
    Cartesian {
        x: f64,
        y: f64,
        z: f64,
    },
    Spherical {
        latitude: f64,
        longitude: f64,
        radius: f64,
    },
    Unreachable,
}

impl From<&Point> for PointRecord {
    fn from(point: &Point) -> Self {
        match point {
            Point::Cartesian(p) => PointRecord::Cartesian {
                x: p.x(),
                y: p.y(),
                z: p.z(),
            },
            Point::Spherical(p) => PointRecord::Spherical {
                latitude: p.latitude(),
                longitude: p.longitude(),
                radius: p.radius(),
            },
            Point::Unreachable(_) => PointRecord::Unreachable,
        }
    }
}
