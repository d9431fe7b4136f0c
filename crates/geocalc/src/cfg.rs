//! Tolerance defaults for shape predicates (internal).
//!
//! Policy
//! - Fixed absolute constants, not scaled by input magnitude. Callers with very
//!   large side lengths can see false negatives in `is_right_triangle`; this
//!   is a known limitation and the value must not change.

/// Absolute slack for `|c² − (a² + b²)|` in right-triangle detection.
pub(crate) const RIGHT_ANGLE_EPS: f64 = 1e-10;
