use mx_dense::{DenseError, Shape};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SparseError {
    #[error("incompatible dimensions: {lhs} x {rhs}")]
    DimensionMismatch { lhs: Shape, rhs: Shape },
    #[error("sparsity must lie in [0, 1], got {0}")]
    InvalidSparsity(f64),
    #[error("invalid row pointers: length {len} for {rows} rows (expected {expected})")]
    InvalidRowPtr {
        len: usize,
        rows: usize,
        expected: usize,
    },
    #[error("row pointers must start at 0, got {0}")]
    RowPtrStart(usize),
    #[error("row pointer not sorted at index {idx}: {curr} > {next}")]
    RowPtrNotSorted { idx: usize, curr: usize, next: usize },
    #[error("row pointers end at {end} but {nnz} values are stored")]
    RowPtrEnd { end: usize, nnz: usize },
    #[error("length mismatch: {col_index} column indices but {values} values")]
    LengthMismatch { col_index: usize, values: usize },
    #[error("column index out of bounds: {col} >= {cols}")]
    ColIndexOutOfBounds { col: usize, cols: usize },
    #[error("column indices of row {row} are not strictly increasing")]
    UnsortedColumns { row: usize },
    #[error("explicit zero stored at position {0}")]
    ExplicitZero(usize),
    #[error("dense error: {0}")]
    Dense(#[from] DenseError),
}

pub type Result<T> = std::result::Result<T, SparseError>;
