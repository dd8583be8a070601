//! Constants module for coordinate calculations

// Spherical component bounds (inclusive)
/// Southernmost latitude in degrees
pub const LATITUDE_MIN: f64 = -90.0;
/// Northernmost latitude in degrees
pub const LATITUDE_MAX: f64 = 90.0;
/// Westernmost longitude in degrees
pub const LONGITUDE_MIN: f64 = -180.0;
/// Easternmost longitude in degrees
pub const LONGITUDE_MAX: f64 = 180.0;
/// Smallest admissible radius
pub const RADIUS_MIN: f64 = 0.0;
/// Radius has no finite upper bound
pub const RADIUS_MAX: f64 = f64::INFINITY;

// Hashing
/// Multiplier of the component hash accumulation
pub const HASH_MULTIPLIER: i32 = 31;
/// Fixed hash of the unreachable sentinel
pub const UNREACHABLE_HASH: i32 = i32::MIN;
