//! Dense linear-algebra kernels over flat row-major buffers.
//!
//! All kernels write into caller-supplied slices and never allocate. Shapes
//! are the caller's responsibility; they are checked only in debug builds.

/// Matrix-vector product: `z = A · x` for a row-major `n × m` matrix.
///
/// # Arguments
/// * `z` - Output vector of length `n` (overwritten)
/// * `a` - Row-major matrix of length `n * m`
/// * `x` - Input vector of length `m`
pub fn matvec(z: &mut [f64], a: &[f64], x: &[f64], n: usize, m: usize) {
    debug_assert_eq!(z.len(), n, "matvec output length mismatch");
    debug_assert_eq!(a.len(), n * m, "matvec matrix length mismatch");
    debug_assert_eq!(x.len(), m, "matvec input length mismatch");

    for (zi, row) in z.iter_mut().zip(a.chunks_exact(m)) {
        let mut sum = 0.0;
        for (w, v) in row.iter().zip(x) {
            sum += w * v;
        }
        *zi = sum;
    }
}

/// Transposed matrix-vector product: `z = Aᵗ · x` for a row-major `n × m`
/// matrix, without materializing the transpose.
///
/// # Arguments
/// * `z` - Output vector of length `m` (overwritten)
/// * `a` - Row-major matrix of length `n * m`
/// * `x` - Input vector of length `n`
pub fn matvec_t(z: &mut [f64], a: &[f64], x: &[f64], n: usize, m: usize) {
    debug_assert_eq!(z.len(), m, "matvec_t output length mismatch");
    debug_assert_eq!(a.len(), n * m, "matvec_t matrix length mismatch");
    debug_assert_eq!(x.len(), n, "matvec_t input length mismatch");

    for (i, zi) in z.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (j, xj) in x.iter().enumerate() {
            sum += a[j * m + i] * xj;
        }
        *zi = sum;
    }
}

/// Outer-product accumulate: `Z[i][j] += b[i] * c[j]` into a row-major
/// `n × m` matrix.
pub fn outer_accum(z: &mut [f64], b: &[f64], c: &[f64], n: usize, m: usize) {
    debug_assert_eq!(z.len(), n * m, "outer_accum matrix length mismatch");
    debug_assert_eq!(b.len(), n, "outer_accum row vector length mismatch");
    debug_assert_eq!(c.len(), m, "outer_accum column vector length mismatch");

    for (row, bi) in z.chunks_exact_mut(m).zip(b) {
        for (zij, cj) in row.iter_mut().zip(c) {
            *zij += bi * cj;
        }
    }
}

/// Scaled accumulate: `z[i] += b[i] * s`.
pub fn axpy_accum(z: &mut [f64], b: &[f64], s: f64) {
    debug_assert_eq!(z.len(), b.len(), "axpy_accum length mismatch");

    for (zi, bi) in z.iter_mut().zip(b) {
        *zi += bi * s;
    }
}

/// Elementwise accumulate: `z[i] += b[i]`.
pub fn add(z: &mut [f64], b: &[f64]) {
    debug_assert_eq!(z.len(), b.len(), "add length mismatch");

    for (zi, bi) in z.iter_mut().zip(b) {
        *zi += bi;
    }
}

/// Elementwise difference: `z[i] = a[i] - b[i]`.
pub fn sub(z: &mut [f64], a: &[f64], b: &[f64]) {
    debug_assert_eq!(z.len(), a.len(), "sub length mismatch");
    debug_assert_eq!(a.len(), b.len(), "sub length mismatch");

    for ((zi, ai), bi) in z.iter_mut().zip(a).zip(b) {
        *zi = ai - bi;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2 x 3 matrix:
    // [1 2 3]
    // [4 5 6]
    const A: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    #[test]
    fn test_matvec() {
        let mut z = [0.0; 2];
        matvec(&mut z, &A, &[1.0, 0.0, -1.0], 2, 3);
        assert_eq!(z, [-2.0, -2.0]);
    }

    #[test]
    fn test_matvec_overwrites_output() {
        let mut z = [100.0; 2];
        matvec(&mut z, &A, &[1.0, 1.0, 1.0], 2, 3);
        assert_eq!(z, [6.0, 15.0]);
    }

    #[test]
    fn test_matvec_t() {
        let mut z = [7.0; 3];
        matvec_t(&mut z, &A, &[1.0, 2.0], 2, 3);
        assert_eq!(z, [9.0, 12.0, 15.0]);
    }

    #[test]
    fn test_outer_accum_adds_to_existing() {
        let mut z = [1.0; 6];
        outer_accum(&mut z, &[1.0, 2.0], &[3.0, 4.0, 5.0], 2, 3);
        assert_eq!(z, [4.0, 5.0, 6.0, 7.0, 9.0, 11.0]);
    }

    #[test]
    fn test_axpy_accum() {
        let mut z = [1.0, 1.0, 1.0];
        axpy_accum(&mut z, &[2.0, 4.0, -2.0], -0.5);
        assert_eq!(z, [0.0, -1.0, 2.0]);
    }

    #[test]
    fn test_add_and_sub() {
        let mut z = [1.0, 2.0];
        add(&mut z, &[0.5, -2.0]);
        assert_eq!(z, [1.5, 0.0]);

        let mut d = [0.0; 2];
        sub(&mut d, &[3.0, 1.0], &[1.0, 4.0]);
        assert_eq!(d, [2.0, -3.0]);
    }
}
