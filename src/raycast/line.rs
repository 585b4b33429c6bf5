//! Incremental line traversal over a maze grid.

use glam::Vec2;

use crate::grid::MazeGrid;
use crate::raycast::heading::{heading_dir, is_steep};
use crate::types::CellBox;

/// Walk a ray from `origin` along `heading_deg` (degrees clockwise from
/// north, taken modulo 360) until it would enter a Wall cell, exit the grid,
/// or exceed `max_distance` world units. Returns the furthest reachable
/// point.
///
/// Wall and grid-edge stops are exact intersections with the boundary of the
/// last traversable cell; a distance stop is the exact radial point at
/// `max_distance`. The result therefore always lies on a cell boundary or at
/// the cap radius, never mid-cell past a wall.
///
/// An origin outside the grid or inside a Wall cell yields a zero-length
/// ray: the origin is returned unchanged.
pub fn traverse_line(
    grid: &MazeGrid,
    origin: Vec2,
    heading_deg: f32,
    max_distance: Option<f32>,
) -> Vec2 {
    let heading = heading_deg.rem_euclid(360.0);
    let dir = heading_dir(heading);

    let Some(start) = grid.cell_at_world(origin) else {
        return origin;
    };
    if !start.kind.is_traversable() {
        return origin;
    }
    let Some(mut cur_box) = grid.cell_box(start.row, start.col) else {
        return origin;
    };

    // One world unit along the major axis per step. The major component is
    // at least cos(45 deg) within its regime, so the step stays bounded.
    let major = if is_steep(heading) {
        dir.y.abs()
    } else {
        dir.x.abs()
    };
    let step = dir / major;
    let step_len = 1.0 / major;

    let mut pos = origin;
    let mut traveled = 0.0_f32;

    loop {
        let next = pos + step;
        let next_traveled = traveled + step_len;

        if !cur_box.contains(next) {
            match grid.cell_at_world(next) {
                Some(cell) if cell.kind.is_traversable() => {
                    match grid.cell_box(cell.row, cell.col) {
                        Some(bbox) => cur_box = bbox,
                        None => return pos,
                    }
                }
                _ => {
                    // Stopped by a wall or the grid edge. A nearer distance
                    // cap still wins, so the two stop kinds never mix.
                    let hit = exit_distance(origin, dir, &cur_box);
                    return match max_distance {
                        Some(max_d) if max_d < hit => origin + dir * max_d,
                        _ => origin + dir * hit,
                    };
                }
            }
        }

        if let Some(max_d) = max_distance {
            if next_traveled > max_d {
                return origin + dir * max_d;
            }
        }

        pos = next;
        traveled = next_traveled;
    }
}

/// Distance from `origin` along `dir` to where the ray leaves `bbox`,
/// measured against the continuous far edges of the box.
fn exit_distance(origin: Vec2, dir: Vec2, bbox: &CellBox) -> f32 {
    let tx = if dir.x > 0.0 {
        (bbox.right_edge() - origin.x) / dir.x
    } else if dir.x < 0.0 {
        (bbox.left - origin.x) / dir.x
    } else {
        f32::INFINITY
    };
    let ty = if dir.y > 0.0 {
        (bbox.bottom_edge() - origin.y) / dir.y
    } else if dir.y < 0.0 {
        (bbox.top - origin.y) / dir.y
    } else {
        f32::INFINITY
    };
    tx.min(ty)
}
