//! Elementwise addition and subtraction.
//!
//! The slice forms back Strassen's quadrant sums; the matrix forms are the
//! checked public entry points.

use crate::error::{DenseError, Result};
use crate::matrix::DenseMatrix;

/// `result[i] = a[i] + b[i]`. Lengths must match.
pub fn add_slices(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

/// `result[i] = a[i] - b[i]`. Lengths must match.
pub fn sub_slices(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// Elementwise sum of two matrices of identical shape.
pub fn add(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix> {
    check_same_shape(a, b)?;
    Ok(DenseMatrix::from_raw(
        add_slices(a.as_slice(), b.as_slice()),
        a.shape(),
    ))
}

/// Elementwise difference `a - b` of two matrices of identical shape.
pub fn sub(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix> {
    check_same_shape(a, b)?;
    Ok(DenseMatrix::from_raw(
        sub_slices(a.as_slice(), b.as_slice()),
        a.shape(),
    ))
}

fn check_same_shape(a: &DenseMatrix, b: &DenseMatrix) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(DenseError::ShapeMismatch {
            expected: a.shape(),
            got: b.shape(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_slices() {
        assert_eq!(add_slices(&[1.0, 2.0], &[3.0, 4.0]), vec![4.0, 6.0]);
    }

    #[test]
    fn test_sub_slices() {
        assert_eq!(sub_slices(&[1.0, 2.0], &[3.0, 5.0]), vec![-2.0, -3.0]);
    }

    #[test]
    fn test_add_matrices() {
        let a = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = DenseMatrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = add(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![6.0, 8.0], vec![10.0, 12.0]]);
        // Operands untouched.
        assert_eq!(a.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_sub_matrices() {
        let a = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = DenseMatrix::identity(2);
        let c = sub(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![0.0, 2.0], vec![3.0, 3.0]]);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = DenseMatrix::zeros(2, 2);
        let b = DenseMatrix::zeros(2, 3);
        assert!(matches!(
            add(&a, &b),
            Err(DenseError::ShapeMismatch { .. })
        ));
        assert!(sub(&a, &b).is_err());
    }
}
