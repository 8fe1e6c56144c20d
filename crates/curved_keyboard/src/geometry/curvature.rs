use crate::error::{KeyboardError, Result};
use log::warn;

/// Public curvature is inverted so that raising the control bends the keyboard more.
#[inline]
pub fn effective_curvature(raw: f64) -> f64 {
    1.0 - raw
}

/// Working radius of the cylinder: `tan(effective * angle_scale) + base_radius`.
///
/// `tan` over `[0, ~pi/2)` maps effective curvature 0 to the base radius and
/// effective curvature 1 to a very large radius (an almost flat row).
#[inline]
pub fn distance_to_center(raw: f64, angle_scale: f64, base_radius: f64) -> f64 {
    (effective_curvature(raw) * angle_scale).tan() + base_radius
}

/// Clamp a curvature value into `[0, 1]`.
pub fn clamp_curvature(raw: f64) -> Result<f64> {
    if !raw.is_finite() {
        return Err(KeyboardError::InvalidCurvature(raw));
    }
    let clamped = raw.clamp(0.0, 1.0);
    if clamped != raw {
        warn!("curvature {raw} outside [0, 1], clamped to {clamped}");
    }
    Ok(clamped)
}
