//! Maze grid metadata.

use glam::Vec2;

/// The default edge lengths of one cell in world units.
pub const DEFAULT_CELL_WIDTH: f32 = 32.0;
pub const DEFAULT_CELL_HEIGHT: f32 = 32.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MazeInfo {
    pub columns: u32,
    pub rows: u32,
    /// World-unit size of one cell. Uniform per axis, not necessarily square.
    pub cell_size: Vec2,
}

impl Default for MazeInfo {
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
            cell_size: Vec2::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT),
        }
    }
}

impl MazeInfo {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    /// Width of the maze in world units.
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.columns as f32 * self.cell_size.x
    }

    /// Height of the maze in world units.
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.rows as f32 * self.cell_size.y
    }

    /// Total world-unit span, used for out-of-bounds testing.
    #[inline]
    pub fn extents(&self) -> Vec2 {
        Vec2::new(self.world_width(), self.world_height())
    }

    /// World-coordinate containment. The far edges are exclusive: a point at
    /// `world_width()` already lies outside the last column.
    #[inline]
    pub fn contains_world(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.world_width()
            && point.y < self.world_height()
    }
}
