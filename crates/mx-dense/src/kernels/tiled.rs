// Blocked multiply.
//
// The `i, j, k` index space is cut into cubes of side `block_size`; each cube
// runs the row-oriented `i, k, j` order with its ranges clamped at the matrix
// edges. Partial sums for an `(i, j)` block accumulate across successive
// `k` blocks, so `c` is only ever added to, never overwritten.

/// Tiled product of `a` `[m, k]` and `b` `[k, n]`. `block_size` must be >= 1.
pub fn tiled(a: &[f64], b: &[f64], m: usize, k: usize, n: usize, block_size: usize) -> Vec<f64> {
    debug_assert!(block_size > 0);

    let mut c = vec![0.0f64; m * n];
    for i_block in (0..m).step_by(block_size) {
        let i_end = (i_block + block_size).min(m);
        for j_block in (0..n).step_by(block_size) {
            let j_end = (j_block + block_size).min(n);
            for k_block in (0..k).step_by(block_size) {
                let k_end = (k_block + block_size).min(k);

                for i in i_block..i_end {
                    let c_row = &mut c[i * n + j_block..i * n + j_end];
                    for p in k_block..k_end {
                        let aik = a[i * k + p];
                        let b_row = &b[p * n + j_block..p * n + j_end];
                        for (cij, &bkj) in c_row.iter_mut().zip(b_row) {
                            *cij += aik * bkj;
                        }
                    }
                }
            }
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::standard;
    use approx::assert_abs_diff_eq;

    fn ramp(len: usize, scale: f64) -> Vec<f64> {
        (0..len).map(|i| ((i * 7 + 3) % 11) as f64 * scale).collect()
    }

    #[test]
    fn test_tiled_basic() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        for block_size in [1, 2, 4] {
            assert_eq!(tiled(&a, &b, 2, 2, 2, block_size), vec![19.0, 22.0, 43.0, 50.0]);
        }
    }

    #[test]
    fn test_tiled_independent_of_block_size() {
        let n = 7;
        let a = ramp(n * n, 0.5);
        let b = ramp(n * n, -0.25);
        let expected = standard(&a, &b, n, n, n);
        for block_size in 1..=n + 2 {
            let c = tiled(&a, &b, n, n, n, block_size);
            for (x, y) in c.iter().zip(&expected) {
                assert_abs_diff_eq!(x, y, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_tiled_rectangular_edges() {
        // Block size 2 leaves ragged edge blocks on every axis.
        let (m, k, n) = (5, 3, 4);
        let a = ramp(m * k, 1.0);
        let b = ramp(k * n, 2.0);
        let expected = standard(&a, &b, m, k, n);
        let c = tiled(&a, &b, m, k, n, 2);
        for (x, y) in c.iter().zip(&expected) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-10);
        }
    }
}
