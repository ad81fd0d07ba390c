use log::debug;
use rand::Rng;

use crate::config::MultiplyConfig;
use crate::error::{DenseError, Result};
use crate::kernels;
use crate::shape::Shape;
use crate::strategy::Strategy;

/// An immutable dense matrix of `f64` scalars.
///
/// Holds contiguous, row-major data with an associated shape. Every
/// operation returns a new matrix; operands are never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    shape: Shape,
}

impl DenseMatrix {
    /// Create a matrix from row-major data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`. Use [`DenseMatrix::from_vec`]
    /// for a checked variant.
    pub fn new(data: Vec<f64>, shape: Shape) -> Self {
        assert_eq!(
            data.len(),
            shape.numel(),
            "data length {} does not match shape {} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        DenseMatrix { data, shape }
    }

    /// Build a matrix from a vector of rows.
    ///
    /// An empty outer vector yields a `0 x 0` matrix.
    ///
    /// # Errors
    /// Returns `RaggedRows` if any row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(DenseError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self::from_raw(data, Shape::new(n_rows, n_cols)))
    }

    /// Build a matrix from row-major data.
    ///
    /// # Errors
    /// Returns `DataLength` if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(DenseError::DataLength {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self::from_raw(data, Shape::new(rows, cols)))
    }

    /// Zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_raw(vec![0.0; rows * cols], Shape::new(rows, cols))
    }

    /// `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self::from_raw(data, Shape::new(n, n))
    }

    /// `n x n` matrix of scalars drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Self {
        let data = (0..n * n).map(|_| rng.gen::<f64>()).collect();
        Self::from_raw(data, Shape::new(n, n))
    }

    /// Caller guarantees `data.len() == shape.numel()`.
    pub(crate) fn from_raw(data: Vec<f64>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.numel());
        DenseMatrix { data, shape }
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

    /// Element at `(i, j)`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.rows() || j >= self.cols() {
            return None;
        }
        Some(self.data[i * self.cols() + j])
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        let cols = self.cols();
        &self.data[i * cols..(i + 1) * cols]
    }

    /// Iterator over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows()).map(move |i| self.row(i))
    }

    /// The underlying row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    /// Zero-extend to `rows x cols`, keeping this matrix in the top-left corner.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the target is smaller than `self` on either axis.
    pub fn padded(&self, rows: usize, cols: usize) -> Result<DenseMatrix> {
        if rows < self.rows() || cols < self.cols() {
            return Err(DenseError::ShapeMismatch {
                expected: self.shape,
                got: Shape::new(rows, cols),
            });
        }
        let data = kernels::pad_block(&self.data, self.rows(), self.cols(), rows, cols);
        Ok(Self::from_raw(data, Shape::new(rows, cols)))
    }

    /// Copy of the `rows x cols` block whose top-left corner is `(row0, col0)`.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the block extends past the matrix edge.
    pub fn submatrix(
        &self,
        row0: usize,
        col0: usize,
        rows: usize,
        cols: usize,
    ) -> Result<DenseMatrix> {
        if row0 + rows > self.rows() || col0 + cols > self.cols() {
            return Err(DenseError::ShapeMismatch {
                expected: self.shape,
                got: Shape::new(row0 + rows, col0 + cols),
            });
        }
        let data = kernels::extract_block(&self.data, self.cols(), row0, col0, rows, cols);
        Ok(Self::from_raw(data, Shape::new(rows, cols)))
    }

    /// True if shapes match and every element differs by at most `tol`.
    pub fn approx_eq(&self, other: &DenseMatrix, tol: f64) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(x, y)| (x - y).abs() <= tol)
    }

    /// Matrix product `self @ other` computed with `strategy`.
    ///
    /// `self` is `[m, k]`, `other` is `[k, n]`, the result is `[m, n]`.
    ///
    /// # Errors
    /// - `DimensionMismatch` if `self.cols() != other.rows()`
    /// - `InvalidBlockSize` for `Strategy::Tiled { block_size: 0 }`
    pub fn multiply(&self, other: &DenseMatrix, strategy: Strategy) -> Result<DenseMatrix> {
        if !self.shape.can_multiply(&other.shape) {
            return Err(DenseError::DimensionMismatch {
                lhs: self.shape,
                rhs: other.shape,
            });
        }

        let m = self.rows();
        let k = self.cols();
        let n = other.cols();
        debug!("dense multiply: {} {} @ {}", strategy, self.shape, other.shape);

        let (a, b) = (self.as_slice(), other.as_slice());
        let data = match strategy {
            Strategy::Standard => kernels::standard(a, b, m, k, n),
            Strategy::RowOriented => kernels::row_oriented(a, b, m, k, n),
            Strategy::Tiled { block_size } => {
                if block_size == 0 {
                    return Err(DenseError::InvalidBlockSize);
                }
                kernels::tiled::tiled(a, b, m, k, n, block_size)
            }
            Strategy::Strassen { threshold } => {
                kernels::strassen::strassen(a, b, m, k, n, threshold)
            }
        };

        Ok(Self::from_raw(data, Shape::new(m, n)))
    }

    /// Baseline `i, j, k` triple loop.
    pub fn multiply_standard(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        self.multiply(other, Strategy::Standard)
    }

    /// Cache-friendly `i, k, j` loop order.
    pub fn multiply_row_oriented(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        self.multiply(other, Strategy::RowOriented)
    }

    /// Blocked multiply with the given block side.
    pub fn multiply_tiled(&self, other: &DenseMatrix, block_size: usize) -> Result<DenseMatrix> {
        self.multiply(other, Strategy::Tiled { block_size })
    }

    /// Strassen with the default base-case threshold.
    pub fn multiply_strassen(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        self.multiply(other, Strategy::strassen())
    }

    /// Run every strategy configured by `config`, pairing each with its result.
    pub fn multiply_all(
        &self,
        other: &DenseMatrix,
        config: &MultiplyConfig,
    ) -> Result<Vec<(Strategy, DenseMatrix)>> {
        Strategy::all(config)
            .into_iter()
            .map(|strategy| self.multiply(other, strategy).map(|c| (strategy, c)))
            .collect()
    }
}
