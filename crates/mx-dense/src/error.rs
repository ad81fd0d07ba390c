use thiserror::Error;

use crate::shape::Shape;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DenseError {
    #[error("multiply dimension mismatch: {lhs} @ {rhs}")]
    DimensionMismatch { lhs: Shape, rhs: Shape },
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: Shape, got: Shape },
    #[error("ragged rows: row {row} has length {got}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("data length {got} does not match shape (expected {expected} elements)")]
    DataLength { expected: usize, got: usize },
    #[error("tiled multiply requires a block size of at least 1")]
    InvalidBlockSize,
}

pub type Result<T> = std::result::Result<T, DenseError>;
