use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerrainError {
    // User-facing: bad CLI input, reported before any grid work
    #[error("{0}")]
    InvalidArguments(String),

    #[error("invalid grid dimensions {height}x{width}")]
    InvalidDimension { height: usize, width: usize },

    #[error("cannot add {delta} to cell ({y}, {x}) of a {height}x{width} grid")]
    OutOfRange {
        y: usize,
        x: usize,
        delta: i64,
        height: usize,
        width: usize,
    },

    #[error("worker {0} panicked")]
    WorkerPanicked(usize),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
