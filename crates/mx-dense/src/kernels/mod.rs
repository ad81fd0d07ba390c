//! Slice-level multiply kernels.
//!
//! All kernels take row-major operands `a` of shape `[m, k]` and `b` of shape
//! `[k, n]` and return a freshly allocated row-major `[m, n]` product. Length
//! checks happen in `DenseMatrix::multiply`; the kernels trust their inputs.

pub mod strassen;
pub mod tiled;

/// Triple loop in `i, j, k` order.
pub fn standard(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
    let mut c = vec![0.0f64; m * n];
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0f64;
            for p in 0..k {
                sum += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
    c
}

/// Loop order `i, k, j`. Each `a[i][k]` is loaded once and the contiguous
/// row `k` of `b` is streamed into row `i` of `c`.
pub fn row_oriented(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
    let mut c = vec![0.0f64; m * n];
    if n == 0 {
        return c;
    }
    for (i, c_row) in c.chunks_exact_mut(n).enumerate() {
        for p in 0..k {
            let aik = a[i * k + p];
            let b_row = &b[p * n..(p + 1) * n];
            for (cij, &bkj) in c_row.iter_mut().zip(b_row) {
                *cij += aik * bkj;
            }
        }
    }
    c
}

/// Copy the `rows x cols` block starting at `(row0, col0)` out of a row-major
/// buffer whose rows are `src_cols` wide.
pub(crate) fn extract_block(
    src: &[f64],
    src_cols: usize,
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
) -> Vec<f64> {
    let mut out = Vec::with_capacity(rows * cols);
    for r in row0..row0 + rows {
        let start = r * src_cols + col0;
        out.extend_from_slice(&src[start..start + cols]);
    }
    out
}

/// Write a `rows x cols` block into `dst` (rows `dst_cols` wide) at `(row0, col0)`.
pub(crate) fn place_block(
    dst: &mut [f64],
    dst_cols: usize,
    row0: usize,
    col0: usize,
    block: &[f64],
    rows: usize,
    cols: usize,
) {
    if cols == 0 {
        return;
    }
    for (r, src_row) in block.chunks_exact(cols).take(rows).enumerate() {
        let start = (row0 + r) * dst_cols + col0;
        dst[start..start + cols].copy_from_slice(src_row);
    }
}

/// Zero-extend a `rows x cols` buffer to `new_rows x new_cols`, keeping the
/// original data in the top-left corner.
pub(crate) fn pad_block(
    src: &[f64],
    rows: usize,
    cols: usize,
    new_rows: usize,
    new_cols: usize,
) -> Vec<f64> {
    let mut out = vec![0.0f64; new_rows * new_cols];
    place_block(&mut out, new_cols, 0, 0, src, rows, cols);
    out
}
