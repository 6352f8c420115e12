//! Angle arithmetic over a configurable full-circle unit.
//!
//! The navigator measures angles in a caller-chosen unit (360 for degrees,
//! 2π for radians, or any custom full-circle value). These helpers wrap
//! values into the canonical ranges for that unit.

/// Wrap an angle into `[0, full)`.
///
/// # Example
/// ```
/// use kurma_nav::core::math::wrap_full;
///
/// assert_eq!(wrap_full(-120.0, 360.0), 240.0);
/// assert_eq!(wrap_full(450.0, 360.0), 90.0);
/// ```
#[inline]
pub fn wrap_full(angle: f64, full: f64) -> f64 {
    angle.rem_euclid(full)
}

/// Wrap an angle into `[-full/2, full/2)`, the shortest signed turn.
///
/// # Example
/// ```
/// use kurma_nav::core::math::wrap_signed;
///
/// assert_eq!(wrap_signed(270.0, 360.0), -90.0);
/// assert_eq!(wrap_signed(-190.0, 360.0), 170.0);
/// ```
#[inline]
pub fn wrap_signed(angle: f64, full: f64) -> f64 {
    (angle + full / 2.0).rem_euclid(full) - full / 2.0
}

/// Round to a fixed number of decimal places.
///
/// Reported headings pass through this so that cardinal directions come out
/// as exact values instead of carrying sub-nano float dust from `atan2`.
#[inline]
pub fn round_places(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
