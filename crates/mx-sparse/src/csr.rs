//! Compressed sparse row storage.
//!
//! For an `m x n` matrix with `nnz` stored entries:
//! - `values`: the nonzero scalars in row-major order, length `nnz`
//! - `col_index`: the column of each value, length `nnz`
//! - `row_ptr`: length `m + 1`; row `i` owns positions `row_ptr[i]..row_ptr[i + 1]`
//!
//! Within a row, columns are strictly increasing and no stored value is zero.

use mx_dense::{DenseMatrix, Shape};
use rand::Rng;

use crate::error::{Result, SparseError};

/// An immutable CSR matrix of `f64` scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    pub(crate) values: Vec<f64>,
    pub(crate) col_index: Vec<usize>,
    pub(crate) row_ptr: Vec<usize>,
    pub(crate) shape: Shape,
}

impl CsrMatrix {
    /// The canonical empty matrix: shape `(0, 0)`, `row_ptr == [0]`.
    pub fn empty() -> Self {
        CsrMatrix {
            values: Vec::new(),
            col_index: Vec::new(),
            row_ptr: vec![0],
            shape: Shape::new(0, 0),
        }
    }

    /// Build from raw CSR arrays, checking every structural invariant.
    ///
    /// # Errors
    /// Reports the first violated invariant: row pointer length, start, order
    /// or end; mismatched array lengths; out-of-range or non-increasing
    /// columns; stored zeros.
    pub fn from_parts(
        values: Vec<f64>,
        col_index: Vec<usize>,
        row_ptr: Vec<usize>,
        shape: impl Into<Shape>,
    ) -> Result<Self> {
        let shape = shape.into();
        let (rows, cols) = (shape.rows(), shape.cols());

        if row_ptr.len() != rows + 1 {
            return Err(SparseError::InvalidRowPtr {
                len: row_ptr.len(),
                rows,
                expected: rows + 1,
            });
        }
        if row_ptr[0] != 0 {
            return Err(SparseError::RowPtrStart(row_ptr[0]));
        }
        for (idx, pair) in row_ptr.windows(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(SparseError::RowPtrNotSorted {
                    idx,
                    curr: pair[0],
                    next: pair[1],
                });
            }
        }
        if col_index.len() != values.len() {
            return Err(SparseError::LengthMismatch {
                col_index: col_index.len(),
                values: values.len(),
            });
        }
        if row_ptr[rows] != values.len() {
            return Err(SparseError::RowPtrEnd {
                end: row_ptr[rows],
                nnz: values.len(),
            });
        }
        for row in 0..rows {
            let cols_in_row = &col_index[row_ptr[row]..row_ptr[row + 1]];
            if let Some(&col) = cols_in_row.iter().find(|&&c| c >= cols) {
                return Err(SparseError::ColIndexOutOfBounds { col, cols });
            }
            if cols_in_row.windows(2).any(|w| w[0] >= w[1]) {
                return Err(SparseError::UnsortedColumns { row });
            }
        }
        if let Some(pos) = values.iter().position(|&v| v == 0.0) {
            return Err(SparseError::ExplicitZero(pos));
        }

        Ok(CsrMatrix {
            values,
            col_index,
            row_ptr,
            shape,
        })
    }

    /// Compress a dense matrix, keeping every cell that is exactly nonzero.
    ///
    /// A matrix with no rows or no columns maps to [`CsrMatrix::empty`].
    pub fn from_dense(dense: &DenseMatrix) -> Self {
        if dense.shape().is_empty() {
            return Self::empty();
        }

        let mut values = Vec::new();
        let mut col_index = Vec::new();
        let mut row_ptr = Vec::with_capacity(dense.rows() + 1);
        row_ptr.push(0);

        for row in dense.iter_rows() {
            for (j, &v) in row.iter().enumerate() {
                if v != 0.0 {
                    values.push(v);
                    col_index.push(j);
                }
            }
            row_ptr.push(values.len());
        }

        CsrMatrix {
            values,
            col_index,
            row_ptr,
            shape: dense.shape(),
        }
    }

    /// Convenience for `from_dense(&DenseMatrix::from_rows(rows)?)`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        Ok(Self::from_dense(&DenseMatrix::from_rows(rows)?))
    }

    /// `n x n` matrix where each cell is independently nonzero with
    /// probability `1 - sparsity`. Stored values are uniform in `(0, 1]`.
    ///
    /// # Errors
    /// Returns `InvalidSparsity` unless `0 <= sparsity <= 1`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, n: usize, sparsity: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&sparsity) {
            return Err(SparseError::InvalidSparsity(sparsity));
        }

        let mut values = Vec::new();
        let mut col_index = Vec::new();
        let mut row_ptr = Vec::with_capacity(n + 1);
        row_ptr.push(0);

        for _ in 0..n {
            for j in 0..n {
                if rng.gen::<f64>() >= sparsity {
                    // gen() is in [0, 1); flip it so zero is never stored.
                    values.push(1.0 - rng.gen::<f64>());
                    col_index.push(j);
                }
            }
            row_ptr.push(values.len());
        }

        Ok(CsrMatrix {
            values,
            col_index,
            row_ptr,
            shape: Shape::new(n, n),
        })
    }

    /// Expand to a dense matrix; unstored cells are zero.
    pub fn to_dense(&self) -> DenseMatrix {
        let cols = self.cols();
        let mut data = vec![0.0f64; self.shape.numel()];
        for i in 0..self.rows() {
            for (j, v) in self.row(i) {
                data[i * cols + j] = v;
            }
        }
        DenseMatrix::new(data, self.shape)
    }

    /// Returns the matrix shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Stored nonzero values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Column of each stored value.
    pub fn col_index(&self) -> &[usize] {
        &self.col_index
    }

    /// Row offsets into `values` and `col_index`, length `rows() + 1`.
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Number of stored (nonzero) entries.
    pub fn numbers_non_zero(&self) -> usize {
        self.values.len()
    }

    /// Fraction of cells that are zero. A zero-sized matrix reports `0`.
    pub fn get_sparsity(&self) -> f64 {
        // Computed in f64: rows * cols may not fit in usize for a huge logical shape.
        let total = self.rows() as f64 * self.cols() as f64;
        if total == 0.0 {
            return 0.0;
        }
        (total - self.numbers_non_zero() as f64) / total
    }

    /// `(column, value)` pairs stored in row `i`, in ascending column order.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.row_ptr[i]..self.row_ptr[i + 1];
        self.col_index[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    /// Value at `(i, j)`: zero for unstored cells, `None` out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.rows() || j >= self.cols() {
            return None;
        }
        let start = self.row_ptr[i];
        let cols_in_row = &self.col_index[start..self.row_ptr[i + 1]];
        Some(
            cols_in_row
                .binary_search(&j)
                .map_or(0.0, |pos| self.values[start + pos]),
        )
    }
}
