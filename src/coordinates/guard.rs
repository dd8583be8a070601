//! Validation of scalar coordinate components
//!
//! Every factory runs its inputs through these checks before anything is
//! computed or cached, so a rejected call never leaves partial state behind.

use crate::errors::{invalid_argument, Result};

/// Fails with `InvalidArgument` when `value` is NaN or infinite
pub fn ensure_finite(value: f64, name: &str) -> Result<()> {
    if value.is_nan() {
        return Err(invalid_argument(name, value, "value is NaN"));
    }
    if value.is_infinite() {
        return Err(invalid_argument(name, value, "value is infinite"));
    }
    Ok(())
}

/// Fails with `InvalidArgument` unless `value` is finite and within `[lower, upper]`
///
/// `upper` may be `f64::INFINITY` to express an open-ended range; `value`
/// itself must still be finite.
pub fn ensure_in_range(value: f64, lower: f64, upper: f64, name: &str) -> Result<()> {
    ensure_finite(value, name)?;
    if value < lower || value > upper {
        return Err(invalid_argument(
            name,
            value,
            format!("value is outside [{}, {}]", lower, upper),
        ));
    }
    Ok(())
}
