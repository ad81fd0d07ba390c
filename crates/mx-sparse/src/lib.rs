//! `mx-sparse` - Compressed sparse row matrices.
//!
//! Provides `CsrMatrix` with conversions to and from `mx_dense::DenseMatrix`,
//! a seeded random factory, nnz/sparsity introspection and an index-driven
//! sparse multiply whose cost follows the number of stored entries.

pub mod csr;
pub mod error;
pub mod multiply;

pub use csr::CsrMatrix;
pub use error::{Result, SparseError};
