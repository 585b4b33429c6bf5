pub mod maze;

pub use maze::{CellRef, MazeGrid};
