use log::{debug, trace};

use crate::arith::{add_slices as add, sub_slices as sub};
use crate::kernels::{extract_block, pad_block, place_block, standard};

/// Strassen product of `a` `[m, k]` and `b` `[k, n]`.
///
/// Problems with any extent at or below `threshold` go straight to the
/// standard loop, so thin products are never padded out to a full square.
/// Otherwise both operands are zero-padded to the next power of two `p` of
/// the largest extent, multiplied recursively, and the `p x p` result is
/// truncated back to `[m, n]`. Zero rows and columns contribute nothing to
/// any dot product, so the truncated result is exact.
pub fn strassen(a: &[f64], b: &[f64], m: usize, k: usize, n: usize, threshold: usize) -> Vec<f64> {
    let threshold = threshold.max(1);
    if m.min(k).min(n) <= threshold {
        return standard(a, b, m, k, n);
    }

    let p = m.max(k).max(n).next_power_of_two();
    if p == m && p == k && p == n {
        return recurse(a, b, p, threshold);
    }

    debug!("strassen: padding [{} x {}] @ [{} x {}] to order {}", m, k, k, n, p);
    let a_padded = pad_block(a, m, k, p, p);
    let b_padded = pad_block(b, k, n, p, p);
    let c_padded = recurse(&a_padded, &b_padded, p, threshold);
    extract_block(&c_padded, p, 0, 0, m, n)
}

/// Square recursion. `n` is a power of two.
fn recurse(a: &[f64], b: &[f64], n: usize, threshold: usize) -> Vec<f64> {
    if n <= threshold {
        return standard(a, b, n, n, n);
    }

    let h = n / 2;
    trace!("strassen: order {} -> 7 products of order {}", n, h);

    let [a11, a12, a21, a22] = quadrants(a, n);
    let [b11, b12, b21, b22] = quadrants(b, n);

    let products = [
        recurse(&add(&a11, &a22), &add(&b11, &b22), h, threshold),
        recurse(&add(&a21, &a22), &b11, h, threshold),
        recurse(&a11, &sub(&b12, &b22), h, threshold),
        recurse(&a22, &sub(&b21, &b11), h, threshold),
        recurse(&add(&a11, &a12), &b22, h, threshold),
        recurse(&sub(&a21, &a11), &add(&b11, &b12), h, threshold),
        recurse(&sub(&a12, &a22), &add(&b21, &b22), h, threshold),
    ];

    let [c11, c12, c21, c22] = combine(&products);

    let mut c = vec![0.0f64; n * n];
    place_block(&mut c, n, 0, 0, &c11, h, h);
    place_block(&mut c, n, 0, h, &c12, h, h);
    place_block(&mut c, n, h, 0, &c21, h, h);
    place_block(&mut c, n, h, h, &c22, h, h);
    c
}

/// Split an `n x n` buffer into its `11, 12, 21, 22` quadrants.
fn quadrants(x: &[f64], n: usize) -> [Vec<f64>; 4] {
    let h = n / 2;
    [
        extract_block(x, n, 0, 0, h, h),
        extract_block(x, n, 0, h, h, h),
        extract_block(x, n, h, 0, h, h),
        extract_block(x, n, h, h, h, h),
    ]
}

/// Recombine the seven products into the result quadrants:
///
/// ```text
/// C11 = M1 + M4 - M5 + M7
/// C12 = M3 + M5
/// C21 = M2 + M4
/// C22 = M1 + M3 - M2 + M6
/// ```
fn combine(products: &[Vec<f64>; 7]) -> [Vec<f64>; 4] {
    let [m1, m2, m3, m4, m5, m6, m7] = products;
    [
        add(&sub(&add(m1, m4), m5), m7),
        add(m3, m5),
        add(m2, m4),
        add(&sub(&add(m1, m3), m2), m6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp(len: usize, scale: f64) -> Vec<f64> {
        (0..len).map(|i| ((i * 5 + 1) % 13) as f64 * scale - 3.0).collect()
    }

    fn assert_close(got: &[f64], expected: &[f64]) {
        assert_eq!(got.len(), expected.len());
        for (x, y) in got.iter().zip(expected) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_base_case_matches_standard() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        assert_eq!(strassen(&a, &b, 2, 2, 2, 64), vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_full_recursion_power_of_two() {
        // Threshold 1 forces recursion all the way down to 1x1 products.
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        assert_close(&strassen(&a, &b, 2, 2, 2, 1), &[19.0, 22.0, 43.0, 50.0]);

        let n = 8;
        let a = ramp(n * n, 0.5);
        let b = ramp(n * n, 1.5);
        assert_close(&strassen(&a, &b, n, n, n, 1), &standard(&a, &b, n, n, n));
    }

    #[test]
    fn test_padding_non_power_of_two() {
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let b = vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let expected = standard(&a, &b, 3, 3, 3);
        for threshold in [0, 1, 2] {
            assert_close(&strassen(&a, &b, 3, 3, 3, threshold), &expected);
        }
    }

    #[test]
    fn test_rectangular_operands() {
        let (m, k, n) = (3, 5, 2);
        let a = ramp(m * k, 1.0);
        let b = ramp(k * n, 0.5);
        let c = strassen(&a, &b, m, k, n, 1);
        assert_close(&c, &standard(&a, &b, m, k, n));
    }

    #[test]
    fn test_thin_product_skips_padding() {
        // A [1 x k] @ [k x 1] dot product must not be padded to k x k.
        let k = 100_000;
        let ones = vec![1.0; k];
        assert_eq!(strassen(&ones, &ones, 1, k, 1, 64), vec![k as f64]);

        let a = ramp(600, 0.5);
        let b = ramp(600, -1.0);
        assert_close(&strassen(&a, &b, 1, 600, 1, 64), &standard(&a, &b, 1, 600, 1));
    }

    #[test]
    fn test_above_default_threshold() {
        // 70 pads to 128, which splits into 64x64 base-case products.
        let n = 70;
        let a = ramp(n * n, 0.01);
        let b = ramp(n * n, -0.02);
        assert_close(&strassen(&a, &b, n, n, n, 64), &standard(&a, &b, n, n, n));
    }

    #[test]
    fn test_combine_identity_products() {
        // With every product equal to [1], C11 = 2, C12 = 2, C21 = 2, C22 = 2.
        let ones: [Vec<f64>; 7] = std::array::from_fn(|_| vec![1.0]);
        let [c11, c12, c21, c22] = combine(&ones);
        assert_eq!(c11, vec![2.0]);
        assert_eq!(c12, vec![2.0]);
        assert_eq!(c21, vec![2.0]);
        assert_eq!(c22, vec![2.0]);
    }

    #[test]
    fn test_empty() {
        assert!(strassen(&[], &[], 0, 0, 0, 64).is_empty());
        assert!(strassen(&[], &[], 0, 0, 0, 0).is_empty());
    }
}
