pub mod json;

pub use json::{load_maze, maze_from_json, maze_to_json, save_maze};
