use glam::Vec2;

use crate::types::{CellBox, CellKind, MazeError, MazeInfo};

/// A cell resolved from world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
    pub kind: CellKind,
}

/// Row-major maze grid. Cell (0, 0) is the top-left corner; y grows
/// downward, matching the screen-space frame the renderers draw in.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    info: MazeInfo,
    cells: Vec<CellKind>,
}

impl MazeGrid {
    pub fn new(info: MazeInfo, cells: Vec<CellKind>) -> Result<Self, MazeError> {
        let expected_len = (info.columns as usize) * (info.rows as usize);
        if cells.len() != expected_len {
            return Err(MazeError::InvalidMetadata(format!(
                "cell count {} does not match grid size {}",
                cells.len(),
                expected_len
            )));
        }

        Ok(Self { info, cells })
    }

    /// A grid with every cell set to `kind`. The editor starts from an
    /// all-Wall canvas and carves the maze out of it.
    pub fn filled(info: MazeInfo, kind: CellKind) -> Self {
        let len = (info.columns as usize) * (info.rows as usize);
        Self {
            info,
            cells: vec![kind; len],
        }
    }

    pub fn info(&self) -> &MazeInfo {
        &self.info
    }

    pub fn columns(&self) -> u32 {
        self.info.columns
    }

    pub fn rows(&self) -> u32 {
        self.info.rows
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Classification at (row, col), or `None` outside grid bounds.
    pub fn kind_at(&self, row: u32, col: u32) -> Option<CellKind> {
        if row >= self.info.rows || col >= self.info.columns {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// World-unit bounding box of (row, col), or `None` outside grid bounds.
    /// Edges are inclusive integer bounds, see [`CellBox`].
    pub fn cell_box(&self, row: u32, col: u32) -> Option<CellBox> {
        if row >= self.info.rows || col >= self.info.columns {
            return None;
        }
        let left = col as f32 * self.info.cell_size.x;
        let top = row as f32 * self.info.cell_size.y;
        Some(CellBox {
            left,
            top,
            right: left + self.info.cell_size.x - 1.0,
            bottom: top + self.info.cell_size.y - 1.0,
        })
    }

    /// Resolve world coordinates to a cell. `None` for negative coordinates
    /// or at/beyond the far edge (far edge exclusive), which the traversal
    /// uses as its natural "edge of world" stop signal.
    pub fn cell_at_world(&self, point: Vec2) -> Option<CellRef> {
        if !self.info.contains_world(point) {
            return None;
        }
        let row = (point.y / self.info.cell_size.y).floor() as u32;
        let col = (point.x / self.info.cell_size.x).floor() as u32;
        let kind = self.kind_at(row, col)?;
        Some(CellRef { row, col, kind })
    }

    /// Direct cell edit, used by the maze editor. Setting Start or End first
    /// clears the existing cell of that kind so at most one of each exists.
    pub fn set_kind(&mut self, row: u32, col: u32, kind: CellKind) -> Result<(), MazeError> {
        if row >= self.info.rows || col >= self.info.columns {
            return Err(MazeError::OutOfBounds(format!(
                "cell ({}, {}) out of bounds for grid {}x{}",
                row, col, self.info.columns, self.info.rows
            )));
        }

        if matches!(kind, CellKind::Start | CellKind::End) {
            if let Some(idx) = self.cells.iter().position(|c| *c == kind) {
                self.cells[idx] = CellKind::Path;
            }
        }

        let idx = self.index(row, col);
        self.cells[idx] = kind;
        Ok(())
    }

    pub fn start_cell(&self) -> Option<(u32, u32)> {
        self.position_of(CellKind::Start)
    }

    pub fn end_cell(&self) -> Option<(u32, u32)> {
        self.position_of(CellKind::End)
    }

    fn position_of(&self, kind: CellKind) -> Option<(u32, u32)> {
        self.cells.iter().position(|c| *c == kind).map(|idx| {
            let idx = idx as u32;
            (idx / self.info.columns, idx % self.info.columns)
        })
    }

    fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.info.columns as usize) + (col as usize)
    }

    /// See [`crate::raycast::traverse_line`].
    pub fn traverse_line(
        &self,
        origin: Vec2,
        heading_deg: f32,
        max_distance: Option<f32>,
    ) -> Vec2 {
        crate::raycast::traverse_line(self, origin, heading_deg, max_distance)
    }
}
