pub mod error;
pub mod geometry;
pub mod info;
pub mod kind;

pub use error::MazeError;
pub use geometry::CellBox;
pub use info::MazeInfo;
pub use kind::{CellKind, CellStyle};
