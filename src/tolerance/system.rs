//! Interval linear system `Ax = b` and its center/radius decomposition.
//!
//! A [`ToleranceSystem`] is the validated pairing of an m×n interval
//! matrix with an m-component interval right-hand side. Every structural
//! check — bound-array agreement, element-wise `lower ≤ upper`,
//! finiteness, and the row/rhs shape constraint — happens here, before
//! any numeric work; a system that exists is well-formed.
//!
//! The [`CenterRadiusForm`] is derived once per solve call and treated as
//! read-only for the whole run. It is what makes the functional evaluator
//! tractable at iteration counts in the thousands: the interval
//! matrix-vector product collapses into two point products
//! (`ac·x` and `ar·|x|`) instead of an enumeration of bound combinations.
use ndarray::{Array1, Array2};

use crate::{
    interval::{IntervalMatrix, IntervalVector},
    tolerance::errors::{TolError, TolResult},
};

/// Validated interval linear system `[inf_a, sup_a]·x = [inf_b, sup_b]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToleranceSystem {
    matrix: IntervalMatrix,
    rhs: IntervalVector,
}

impl ToleranceSystem {
    /// Pair an interval matrix with an interval right-hand side.
    ///
    /// # Errors
    /// Returns [`TolError::SystemShapeMismatch`] when the right-hand-side
    /// length does not equal the matrix row count.
    pub fn new(matrix: IntervalMatrix, rhs: IntervalVector) -> TolResult<Self> {
        if matrix.nrows() != rhs.len() {
            return Err(TolError::SystemShapeMismatch {
                rows: matrix.nrows(),
                rhs_len: rhs.len(),
            });
        }
        Ok(Self { matrix, rhs })
    }

    /// Build a system directly from the four bound arrays.
    ///
    /// Validation order: matrix shape agreement, right-hand-side length
    /// agreement, element finiteness and `lower ≤ upper`, then the system
    /// shape constraint. The first violation fails the call; nothing is
    /// computed on invalid input.
    ///
    /// # Errors
    /// - [`TolError::MatrixRowMismatch`] / [`TolError::MatrixColumnMismatch`]
    ///   / [`TolError::RhsLengthMismatch`] for bound-array disagreement.
    /// - [`TolError::NonFiniteMatrixEntry`] / [`TolError::NonFiniteRhsEntry`]
    ///   for NaN or infinite bounds.
    /// - [`TolError::InvalidMatrixInterval`] / [`TolError::InvalidRhsInterval`]
    ///   for inverted bounds.
    /// - [`TolError::SystemShapeMismatch`] when rows ≠ rhs length.
    pub fn from_bounds(
        inf_a: Array2<f64>, sup_a: Array2<f64>, inf_b: Array1<f64>, sup_b: Array1<f64>,
    ) -> TolResult<Self> {
        let matrix = IntervalMatrix::from_bounds(inf_a, sup_a)?;
        let rhs = IntervalVector::from_bounds(inf_b, sup_b)?;
        Self::new(matrix, rhs)
    }

    /// Number of equations `m`.
    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of unknowns `n`.
    pub fn ncols(&self) -> usize {
        self.matrix.ncols()
    }

    /// The interval coefficient matrix.
    pub fn matrix(&self) -> &IntervalMatrix {
        &self.matrix
    }

    /// The interval right-hand side.
    pub fn rhs(&self) -> &IntervalVector {
        &self.rhs
    }

    /// Lower-bound coefficient matrix.
    pub fn inf_a(&self) -> &Array2<f64> {
        self.matrix.inf()
    }

    /// Upper-bound coefficient matrix.
    pub fn sup_a(&self) -> &Array2<f64> {
        self.matrix.sup()
    }

    /// Lower-bound right-hand side.
    pub fn inf_b(&self) -> &Array1<f64> {
        self.rhs.inf()
    }

    /// Upper-bound right-hand side.
    pub fn sup_b(&self) -> &Array1<f64> {
        self.rhs.sup()
    }
}

/// Center/radius decomposition of a [`ToleranceSystem`].
///
/// - `ac = (inf_a + sup_a) / 2`, `ar = (sup_a − inf_a) / 2` (element-wise,
///   `ar ≥ 0` by construction),
/// - `bc = (inf_b + sup_b) / 2`, `br = (sup_b − inf_b) / 2` (`br ≥ 0`).
///
/// Computed once per solve call; the solver treats it as constant for the
/// whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterRadiusForm {
    pub ac: Array2<f64>,
    pub ar: Array2<f64>,
    pub bc: Array1<f64>,
    pub br: Array1<f64>,
}

impl CenterRadiusForm {
    /// Decompose a validated system into centers and radii.
    pub fn new(system: &ToleranceSystem) -> Self {
        let inf_a = system.inf_a();
        let sup_a = system.sup_a();
        let inf_b = system.inf_b();
        let sup_b = system.sup_b();
        Self {
            ac: 0.5 * (inf_a + sup_a),
            ar: 0.5 * (sup_a - inf_a),
            bc: 0.5 * (inf_b + sup_b),
            br: 0.5 * (sup_b - inf_b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Fail-fast validation of the four bound arrays in the documented
    //   order.
    // - Correctness of the center/radius decomposition on a hand-computed
    //   system.
    //
    // They intentionally DO NOT cover:
    // - Functional evaluation or solving — covered by the functional and
    //   solver tests.
    // -------------------------------------------------------------------------

    fn small_bounds() -> (Array2<f64>, Array2<f64>, Array1<f64>, Array1<f64>) {
        (
            array![[0.65, 0.70], [0.75, 0.70]],
            array![[1.25, 1.30], [1.35, 1.30]],
            array![2.75, 2.85],
            array![3.15, 3.25],
        )
    }

    #[test]
    // Purpose
    // -------
    // Verify that a row-count disagreement between the bound matrices fails
    // before any numeric work.
    //
    // Given
    // -----
    // - inf_a with one extra row relative to sup_a.
    //
    // Expect
    // ------
    // - MatrixRowMismatch { inf_rows: 3, sup_rows: 2 }.
    fn from_bounds_rejects_row_mismatch() {
        let (_, sup_a, inf_b, sup_b) = small_bounds();
        let inf_a = array![[0.65, 0.70], [0.75, 0.70], [0.0, 0.0]];
        let err = ToleranceSystem::from_bounds(inf_a, sup_a, inf_b, sup_b).unwrap_err();
        assert_eq!(err, TolError::MatrixRowMismatch { inf_rows: 3, sup_rows: 2 });
    }

    #[test]
    // Purpose
    // -------
    // Verify that an inverted right-hand-side pairing is rejected with its
    // index.
    //
    // Given
    // -----
    // - inf_b = [2, 1] against sup_b = [3, 0.5]: index 1 has lower 1 above
    //   upper 0.5.
    //
    // Expect
    // ------
    // - InvalidRhsInterval { index: 1, .. }.
    fn from_bounds_rejects_inverted_rhs_pair() {
        let (inf_a, sup_a, _, _) = small_bounds();
        let inf_b = array![2.0, 1.0];
        let sup_b = array![3.0, 0.5];
        let err = ToleranceSystem::from_bounds(inf_a, sup_a, inf_b, sup_b).unwrap_err();
        assert_eq!(err, TolError::InvalidRhsInterval { index: 1, inf: 1.0, sup: 0.5 });
    }

    #[test]
    // Purpose
    // -------
    // Verify the rows-vs-rhs shape constraint.
    //
    // Given
    // -----
    // - A 2×2 matrix paired with a 3-component right-hand side.
    //
    // Expect
    // ------
    // - SystemShapeMismatch { rows: 2, rhs_len: 3 }.
    fn from_bounds_rejects_rhs_of_wrong_length() {
        let (inf_a, sup_a, _, _) = small_bounds();
        let inf_b = array![0.0, 0.0, 0.0];
        let sup_b = array![1.0, 1.0, 1.0];
        let err = ToleranceSystem::from_bounds(inf_a, sup_a, inf_b, sup_b).unwrap_err();
        assert_eq!(err, TolError::SystemShapeMismatch { rows: 2, rhs_len: 3 });
    }

    #[test]
    // Purpose
    // -------
    // Check the center/radius decomposition against hand-computed values.
    //
    // Given
    // -----
    // - The 2×2 system with inf_a/sup_a radii of 0.3 and rhs radii of 0.2.
    //
    // Expect
    // ------
    // - ac = [[0.95, 1.0], [1.05, 1.0]], ar = 0.3 everywhere,
    //   bc = [2.95, 3.05], br = [0.2, 0.2].
    fn center_radius_matches_hand_computation() {
        let (inf_a, sup_a, inf_b, sup_b) = small_bounds();
        let system = ToleranceSystem::from_bounds(inf_a, sup_a, inf_b, sup_b).unwrap();
        let cr = CenterRadiusForm::new(&system);
        let expected_ac = array![[0.95, 1.0], [1.05, 1.0]];
        let expected_bc = array![2.95, 3.05];
        for ((i, j), &v) in cr.ac.indexed_iter() {
            assert!((v - expected_ac[[i, j]]).abs() < 1e-12);
            assert!((cr.ar[[i, j]] - 0.3).abs() < 1e-12);
        }
        for (i, &v) in cr.bc.iter().enumerate() {
            assert!((v - expected_bc[i]).abs() < 1e-12);
            assert!((cr.br[i] - 0.2).abs() < 1e-12);
        }
    }
}
