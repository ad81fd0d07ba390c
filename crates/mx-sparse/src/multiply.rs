use std::collections::BTreeMap;

use log::debug;
use mx_dense::Shape;

use crate::csr::CsrMatrix;
use crate::error::{Result, SparseError};

impl CsrMatrix {
    /// Sparse product `self @ other`.
    ///
    /// For each row `i` of `self` and each stored `(k, a)` in it, every stored
    /// `(j, b)` in row `k` of `other` contributes `a * b` to `(i, j)`. Work is
    /// proportional to the number of such index pairs rather than `m * k * n`.
    /// Output rows are emitted in ascending column order; sums that cancel to
    /// exactly zero are not stored.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &CsrMatrix) -> Result<CsrMatrix> {
        if self.cols() != other.rows() {
            return Err(SparseError::DimensionMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let n_rows = self.rows();
        let n_cols = other.cols();

        let mut values = Vec::new();
        let mut col_index = Vec::new();
        let mut row_ptr = Vec::with_capacity(n_rows + 1);
        row_ptr.push(0);

        // Per-row accumulator keyed by output column; iteration yields ascending columns.
        let mut acc: BTreeMap<usize, f64> = BTreeMap::new();
        for i in 0..n_rows {
            for (k, a_val) in self.row(i) {
                for (j, b_val) in other.row(k) {
                    *acc.entry(j).or_insert(0.0) += a_val * b_val;
                }
            }
            for (j, v) in std::mem::take(&mut acc) {
                if v != 0.0 {
                    values.push(v);
                    col_index.push(j);
                }
            }
            row_ptr.push(values.len());
        }

        debug!(
            "sparse multiply: {} @ {} -> nnz {}",
            self.shape(),
            other.shape(),
            values.len()
        );

        Ok(CsrMatrix {
            values,
            col_index,
            row_ptr,
            shape: Shape::new(n_rows, n_cols),
        })
    }
}
