pub mod grid;
pub mod loaders;
pub mod raycast;
pub mod types;

pub use grid::{CellRef, MazeGrid};
pub use loaders::json::{load_maze, maze_from_json, maze_to_json, save_maze};
pub use raycast::{advance, cast_column, fan_headings, traverse_line};
pub use types::{CellBox, CellKind, MazeError, MazeInfo};
