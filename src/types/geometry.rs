//! Geometric types shared by the grid and traversal APIs.

use glam::Vec2;

/// World-axis-aligned bounding box of one grid cell.
/// Edges are inclusive integer-unit bounds: `right = left + width - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl CellBox {
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Continuous x where the next column begins.
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.right + 1.0
    }

    /// Continuous y where the next row begins.
    #[inline]
    pub fn bottom_edge(&self) -> f32 {
        self.bottom + 1.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right_edge()) * 0.5,
            (self.top + self.bottom_edge()) * 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> CellBox {
        CellBox {
            left: 64.0,
            top: 32.0,
            right: 95.0,
            bottom: 63.0,
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let b = unit_box();
        assert!(b.contains(Vec2::new(64.0, 32.0)));
        assert!(b.contains(Vec2::new(95.0, 63.0)));
        assert!(!b.contains(Vec2::new(96.0, 40.0)));
        assert!(!b.contains(Vec2::new(70.0, 31.9)));
    }

    #[test]
    fn center_sits_mid_cell() {
        assert_eq!(unit_box().center(), Vec2::new(80.0, 48.0));
    }
}
