//! The "nowhere" sentinel
//!
//! `UnreachablePoint` stands for a location that is undefined or cannot be
//! reached. There is exactly one instance per process. It has no components,
//! every distance to or from it is infinite, and it refuses conversion.
//!
//! Equality and hashing are deliberately asymmetric: the sentinel never
//! compares equal to anything, itself included, while always hashing to
//! [`UNREACHABLE_HASH`].

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::UNREACHABLE_HASH;

/// Marker for an undefined location
pub struct UnreachablePoint {
    _sealed: (),
}

static NOWHERE: UnreachablePoint = UnreachablePoint { _sealed: () };

impl UnreachablePoint {
    /// The process-wide sentinel
    pub fn instance() -> &'static UnreachablePoint {
        &NOWHERE
    }

    /// Always `UNREACHABLE_HASH`
    pub fn hash_code(&self) -> i32 {
        UNREACHABLE_HASH
    }
}

impl PartialEq for UnreachablePoint {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Hash for UnreachablePoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Debug for UnreachablePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnreachablePoint")
    }
}

impl fmt::Display for UnreachablePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("nowhere")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &UnreachablePoint) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_single_instance() {
        assert!(std::ptr::eq(
            UnreachablePoint::instance(),
            UnreachablePoint::instance()
        ));
    }

    #[test]
    #[allow(clippy::eq_op)]
    fn test_never_equal_but_stable_hash() {
        let nowhere = UnreachablePoint::instance();
        assert!(nowhere != nowhere);
        assert_eq!(nowhere.hash_code(), UNREACHABLE_HASH);
        assert_eq!(hash_of(nowhere), hash_of(UnreachablePoint::instance()));
    }

    #[test]
    fn test_formatting() {
        let nowhere = UnreachablePoint::instance();
        assert_eq!(nowhere.to_string(), "nowhere");
        assert_eq!(format!("{:?}", nowhere), "UnreachablePoint");
    }
}
