use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("unknown cell kind: {0}")]
    UnknownCellKind(String),
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
}
