//! JSON persistence for authored mazes.
//!
//! The document shape is the boundary contract shared with the editor and
//! any host that stores mazes:
//!
//! ```json
//! { "columns": 5, "rows": 5,
//!   "cellSize": { "width": 32, "height": 32 },
//!   "cells": ["Start", "Path", "Wall", ...] }
//! ```
//!
//! Cells are row-major classification labels. Unknown labels, a cell count
//! that does not match the dimensions, and a Start or End count other than
//! one all fail the load; nothing is silently defaulted.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::grid::MazeGrid;
use crate::types::{CellKind, MazeError, MazeInfo};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeFile {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: CellSize,
    pub cells: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

pub fn maze_from_json(json: &str) -> Result<MazeGrid, MazeError> {
    let file: MazeFile = serde_json::from_str(json)?;

    let mut cells = Vec::with_capacity(file.cells.len());
    for label in &file.cells {
        cells.push(CellKind::from_label(label)?);
    }

    let info = MazeInfo {
        columns: file.columns,
        rows: file.rows,
        cell_size: Vec2::new(file.cell_size.width, file.cell_size.height),
    };
    let grid = MazeGrid::new(info, cells)?;
    validate_endpoints(&grid)?;
    Ok(grid)
}

pub fn maze_to_json(grid: &MazeGrid) -> Result<String, MazeError> {
    let info = grid.info();
    let file = MazeFile {
        columns: info.columns,
        rows: info.rows,
        cell_size: CellSize {
            width: info.cell_size.x,
            height: info.cell_size.y,
        },
        cells: grid.cells().iter().map(|c| c.label().to_string()).collect(),
    };
    Ok(serde_json::to_string(&file)?)
}

pub fn load_maze(path: impl AsRef<Path>) -> Result<MazeGrid, MazeError> {
    let json = std::fs::read_to_string(path)?;
    maze_from_json(&json)
}

pub fn save_maze(path: impl AsRef<Path>, grid: &MazeGrid) -> Result<(), MazeError> {
    std::fs::write(path, maze_to_json(grid)?)?;
    Ok(())
}

/// An authored maze carries exactly one Start and one End; the play-state
/// machine downstream has no defined behaviour for any other count.
fn validate_endpoints(grid: &MazeGrid) -> Result<(), MazeError> {
    for kind in [CellKind::Start, CellKind::End] {
        let count = grid.cells().iter().filter(|c| **c == kind).count();
        if count != 1 {
            return Err(MazeError::InvalidMetadata(format!(
                "expected exactly one {} cell, found {}",
                kind.label(),
                count
            )));
        }
    }
    Ok(())
}
