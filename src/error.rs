use thiserror::Error;

/// Error types for the clustergen library
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Rows, columns or cluster count is zero
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Coordinate bounds or offset are inverted, negative or not finite
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// A tuning parameter is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
