use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be at least 1x1, got {columns}x{rows}")]
    InvalidDimension { columns: usize, rows: usize },
}
