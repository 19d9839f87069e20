//! numerics::least_squares — SVD-backed starting-point construction.
//!
//! Purpose
//! -------
//! Produce the optimizer's starting point from the center system
//! `ac·x = bc`: the least-squares (or minimum-norm) solution when the
//! center matrix is usably conditioned, the zero vector otherwise. The
//! decision is made on the singular-value extrema so that a near-singular
//! center matrix never amplifies numerical noise into the first iterate.
//!
//! Key behaviors
//! -------------
//! - Copy the `ndarray` matrix into a `nalgebra::DMatrix` (`fill_dmatrix`)
//!   for the decomposition work; everything else in the crate stays on
//!   `ndarray`.
//! - Gate the least-squares solve on `min_sv != 0` and
//!   `max_sv / min_sv < MAX_CONDITION`.
//! - Fall back to the zero vector on the ill-conditioned branch; this is
//!   handled internally and never surfaced as an error.
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

/// Condition-number ceiling above which the center system is treated as
/// numerically singular.
pub const MAX_CONDITION: f64 = 1e12;

/// Smallest and largest singular values of a rectangular matrix.
///
/// Returns `(0.0, 0.0)` for an empty matrix.
pub fn singular_extrema(a: &Array2<f64>) -> (f64, f64) {
    if a.is_empty() {
        return (0.0, 0.0);
    }
    let values = fill_dmatrix(a).singular_values();
    let mut min_sv = f64::INFINITY;
    let mut max_sv = 0.0_f64;
    for &sv in values.iter() {
        min_sv = min_sv.min(sv);
        max_sv = max_sv.max(sv);
    }
    (min_sv, max_sv)
}

/// Starting point for the ascent: least-squares solution of `ac·x = bc`
/// when the condition number allows, the zero vector otherwise.
///
/// The SVD-based solve also covers the rectangular cases: overdetermined
/// systems get the least-squares solution, underdetermined ones the
/// minimum-norm solution.
pub fn starting_point(ac: &Array2<f64>, bc: &Array1<f64>) -> Array1<f64> {
    let n = ac.ncols();
    let (min_sv, max_sv) = singular_extrema(ac);
    if min_sv == 0.0 || max_sv / min_sv >= MAX_CONDITION {
        return Array1::zeros(n);
    }
    let svd = fill_dmatrix(ac).svd(true, true);
    let rhs = DVector::from_iterator(bc.len(), bc.iter().copied());
    match svd.solve(&rhs, f64::EPSILON) {
        Ok(solution) => Array1::from_iter(solution.iter().copied()),
        Err(_) => Array1::zeros(n),
    }
}

/// Euclidean norm of a vector.
pub fn l2_norm(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}

// ---- Helper methods ----

/// Copy an `ndarray` matrix into a `nalgebra::DMatrix`, column by column
/// to match the column-major storage of the target.
fn fill_dmatrix(a: &Array2<f64>) -> DMatrix<f64> {
    let (rows, cols) = a.dim();
    let mut out = DMatrix::<f64>::zeros(rows, cols);
    for j in 0..cols {
        for i in 0..rows {
            out[(i, j)] = a[[i, j]];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Singular-value extrema on matrices with known spectra.
    // - The least-squares starting point for square, overdetermined, and
    //   singular center matrices.
    //
    // They intentionally DO NOT cover:
    // - The ascent loop's use of the starting point — the solver tests do.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the singular-value extrema of a diagonal matrix.
    //
    // Given
    // -----
    // - diag(4, 1), whose singular values are exactly {4, 1}.
    //
    // Expect
    // ------
    // - (min, max) = (1, 4) up to numerical precision.
    fn singular_extrema_of_diagonal_matrix() {
        let a = array![[4.0, 0.0], [0.0, 1.0]];
        let (min_sv, max_sv) = singular_extrema(&a);
        assert!((min_sv - 1.0).abs() < 1e-12);
        assert!((max_sv - 4.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a well-conditioned square system yields its exact
    // solution as the starting point.
    //
    // Given
    // -----
    // - ac = [[0.95, 1.0], [1.05, 1.0]], bc = (2.95, 3.05), whose unique
    //   solution is (1, 2).
    //
    // Expect
    // ------
    // - starting_point ≈ (1, 2) within 1e-9.
    fn starting_point_solves_well_conditioned_square_system() {
        let ac = array![[0.95, 1.0], [1.05, 1.0]];
        let bc = array![2.95, 3.05];
        let x0 = starting_point(&ac, &bc);
        assert!((x0[0] - 1.0).abs() < 1e-9);
        assert!((x0[1] - 2.0).abs() < 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Verify the least-squares behavior on an overdetermined system.
    //
    // Given
    // -----
    // - ac = [[1], [1]], bc = (2, 4): the least-squares solution is the
    //   mean, 3.
    //
    // Expect
    // ------
    // - starting_point ≈ (3) within 1e-9.
    fn starting_point_takes_least_squares_solution_when_overdetermined() {
        let ac = array![[1.0], [1.0]];
        let bc = array![2.0, 4.0];
        let x0 = starting_point(&ac, &bc);
        assert_eq!(x0.len(), 1);
        assert!((x0[0] - 3.0).abs() < 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Verify the zero-vector fallback for a singular center matrix.
    //
    // Given
    // -----
    // - A rank-one 2×2 matrix (second row a multiple of the first).
    //
    // Expect
    // ------
    // - starting_point = (0, 0) exactly.
    fn starting_point_falls_back_to_zero_for_singular_matrix() {
        let ac = array![[1.0, 2.0], [2.0, 4.0]];
        let bc = array![1.0, 2.0];
        let x0 = starting_point(&ac, &bc);
        assert_eq!(x0, array![0.0, 0.0]);
    }
}
