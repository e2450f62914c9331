//! Numeric and byte-order formatting shared by the platform generators.

use crate::types::Point;

/// Round a scalar measure to 2 decimals and render it without trailing
/// zeros: `16.004` → `"16"`, `-0.5` → `"-0.5"`.
pub fn format_scalar(measure: f64) -> String {
    let rounded = (measure * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // Avoid "-0" for small negative measures.
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Round an opacity measure to 2 decimals, always keeping 2 decimal places:
/// `0.5` → `"0.50"`, `1` → `"1.00"`.
pub fn format_opacity(measure: f64) -> String {
    format!("{:.2}", (measure * 100.0).round() / 100.0)
}

/// Angle of a gradient axis in degrees, in `[0, 360)`.
///
/// `atan2` output is rotated by +90 so that 0 points at the top of the
/// screen and angles grow clockwise, matching the drawable convention.
pub fn gradient_angle(from: Point, to: Point) -> f64 {
    let radians = (to.y - from.y).atan2(to.x - from.x);
    let result = radians * 180.0 / std::f64::consts::PI + 90.0;
    let result = if result < 0.0 { result + 360.0 } else { result };
    result % 360.0
}

/// Reorder an 8-digit `#rrggbbaa` hex string into `aarrggbb`.
///
/// The trailing alpha pair moves to the front and the `#` is stripped, as
/// expected by ARGB-ordered resource formats.
pub fn argb_hex(hex: &str) -> String {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    debug_assert_eq!(hex.len(), 8, "argb_hex expects an 8-digit hex string");
    let (rgb, alpha) = hex.split_at(hex.len().saturating_sub(2));
    format!("{}{}", alpha, rgb)
}
