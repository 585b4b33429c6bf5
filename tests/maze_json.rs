//! Persistence round-trips between `MazeGrid` and the JSON maze document.

use glam::Vec2;
use mazecast::{maze_from_json, maze_to_json, CellKind, MazeGrid, MazeInfo};

const TEST_MAZE: &str = r#"{"columns":5,"rows":5,"cellSize":{"width":32,"height":32},"cells":["Start","Path","Path","Path","Path","Wall","Wall","Path","Path","Path","Wall","Wall","Path","Path","Path","Wall","Wall","Path","Path","Path","Wall","Wall","Wall","Wall","End"]}"#;

#[test]
fn round_trip_preserves_every_cell() {
    let grid = maze_from_json(TEST_MAZE).expect("maze should parse");
    let json = maze_to_json(&grid).expect("maze should serialize");
    let reloaded = maze_from_json(&json).expect("serialized maze should parse");

    assert_eq!(grid.info(), reloaded.info());
    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            assert_eq!(grid.kind_at(row, col), reloaded.kind_at(row, col));
        }
    }
}

#[test]
fn round_trip_preserves_non_square_cells() {
    let info = MazeInfo {
        columns: 2,
        rows: 1,
        cell_size: Vec2::new(48.0, 24.0),
    };
    let grid = MazeGrid::new(info, vec![CellKind::Start, CellKind::End]).expect("grid builds");

    let json = maze_to_json(&grid).expect("maze should serialize");
    let reloaded = maze_from_json(&json).expect("serialized maze should parse");
    assert_eq!(reloaded.info().cell_size, Vec2::new(48.0, 24.0));
    assert_eq!(reloaded.kind_at(0, 1), Some(CellKind::End));
}

#[test]
fn editor_grids_validate_on_save_load() {
    // A blank editor canvas has no Start/End yet; it can be built in memory
    // but its serialized form is rejected on load.
    let blank = MazeGrid::filled(MazeInfo::new(3, 3), CellKind::Wall);
    let json = maze_to_json(&blank).expect("serialization itself is fine");
    assert!(maze_from_json(&json).is_err());
}
