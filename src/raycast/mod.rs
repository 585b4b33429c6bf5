use glam::Vec2;

use crate::grid::MazeGrid;

pub mod heading;
pub mod line;

pub use heading::{heading_dir, is_steep, slope_from_heading};
pub use line::traverse_line;

/// Collision-limited movement: the furthest the player can travel from
/// `origin` along `heading_deg` without entering a wall, capped at
/// `step_distance`. Backward travel is the caller's concern: flip the
/// heading by 180 degrees before calling.
pub fn advance(grid: &MazeGrid, origin: Vec2, heading_deg: f32, step_distance: f32) -> Vec2 {
    traverse_line(grid, origin, heading_deg, Some(step_distance))
}

/// Cast one uncapped ray for a screen column. The returned point lies on a
/// cell boundary, never mid-cell past a wall, so the renderer can derive a
/// perspective-correct wall distance from it.
pub fn cast_column(grid: &MazeGrid, origin: Vec2, column_heading: f32) -> Vec2 {
    traverse_line(grid, origin, column_heading, None)
}

/// Per-column headings for a fan of `count` rays covering `fov_deg` centred
/// on `center_heading`, one ray per screen column (or per fan spoke in the
/// top-down view). Headings are normalized to [0, 360).
pub fn fan_headings(
    center_heading: f32,
    fov_deg: f32,
    count: usize,
) -> impl Iterator<Item = f32> {
    let step = fov_deg / count as f32;
    let first = center_heading - fov_deg / 2.0 + step / 2.0;
    (0..count).map(move |i| (first + i as f32 * step).rem_euclid(360.0))
}
