//! Compass-heading math. Headings are degrees clockwise from north ("up"),
//! in a y-down coordinate frame: `dx = sin(h)`, `dy = -cos(h)`.

use glam::Vec2;

/// Unit direction vector for a heading in degrees.
#[inline]
pub fn heading_dir(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

/// A heading is steep when it lies within 45 degrees of due north or due
/// south. Steep rays step along y, shallow rays along x; stepping along the
/// major axis keeps per-step increments bounded and avoids the
/// infinite-slope singularity at vertical headings.
#[inline]
pub fn is_steep(heading_deg: f32) -> bool {
    heading_deg < 45.0 || heading_deg > 315.0 || (135.0 < heading_deg && 225.0 > heading_deg)
}

/// Tangent-based slope of a ray in the y-down frame: NaN at 0/180 (vertical
/// line, undefined slope), 0 at 90/270, exactly +/-1 at the 45-degree
/// multiples, `1/tan` otherwise.
pub fn slope_from_heading(heading_deg: f32) -> f32 {
    if heading_deg == 0.0 || heading_deg == 180.0 {
        f32::NAN
    } else if heading_deg == 90.0 || heading_deg == 270.0 {
        0.0
    } else if heading_deg == 45.0 || heading_deg == 225.0 {
        1.0
    } else if heading_deg == 135.0 || heading_deg == 315.0 {
        -1.0
    } else {
        1.0 / heading_deg.to_radians().tan()
    }
}
