//! tolerance::functional — recognizing-functional evaluation.
//!
//! Purpose
//! -------
//! Compute the tolerance (recognizing) functional `Tol(x)`, its
//! supergradient, and the per-equation generating-functional values at a
//! point. `Tol` is concave and piecewise linear: it is the minimum over
//! equations of terms affine in `x` and `|x|`, so its maximum
//! characterizes the non-emptiness and "depth" of the tolerable solution
//! set.
//!
//! Key behaviors
//! -------------
//! - Evaluate the generating functionals through the center/radius form:
//!   `tt_i = weight_i · (br_i − max(|infs_i|, |sups_i|))` with
//!   `infs = bc − (ac·x + ar·|x|)` and `sups = bc − (ac·x − ar·|x|)`.
//! - Take the minimum with **first-index tie-breaking**; the supergradient
//!   is built from the active equation only, so the tie rule shapes the
//!   whole ascent trajectory and must not change.
//! - Select the one-sided derivative of `max(|infs|, |sups|)` per
//!   coordinate: the radius term `ar·|x|` is not smooth at `x_j = 0`,
//!   hence the component-wise `x < 0` / `x ≥ 0` split over the original
//!   bound matrices.
//!
//! Invariants & assumptions
//! ------------------------
//! - The borrowed center/radius form and weight vector are constant for
//!   the lifetime of the evaluator; evaluation is side-effect free.
//! - `weight` has length `m` with strictly positive components (validated
//!   by the solver before the evaluator is built).
//! - `ar ≥ 0` and `br ≥ 0` element-wise, by construction of the
//!   decomposition.
use ndarray::Array1;

use crate::tolerance::system::{CenterRadiusForm, ToleranceSystem};

/// One evaluation of the recognizing functional at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// `Tol(x) = min_i tt_i`.
    pub value: f64,
    /// A supergradient of `Tol` at `x`, taken from the active equation.
    pub supergradient: Array1<f64>,
    /// Generating-functional values `tt_i`, one per equation.
    pub margins: Array1<f64>,
}

/// Evaluator bound to one system, one decomposition, and one weight
/// vector for the duration of a solve call.
#[derive(Debug)]
pub struct TolFunctional<'a> {
    system: &'a ToleranceSystem,
    cr: &'a CenterRadiusForm,
    weight: &'a Array1<f64>,
}

impl<'a> TolFunctional<'a> {
    pub fn new(
        system: &'a ToleranceSystem, cr: &'a CenterRadiusForm, weight: &'a Array1<f64>,
    ) -> Self {
        Self { system, cr, weight }
    }

    /// Evaluate `Tol`, a supergradient, and the per-equation margins at `x`.
    ///
    /// The margin `tt_i` is the signed, weighted amount by which equation
    /// `i`'s interval containment holds (positive) or fails (negative) at
    /// `x`. The supergradient is exact on the active piece: with `mc` the
    /// first minimizing index,
    ///
    /// ```text
    /// dl_j = inf_a[mc][j]  if x_j < 0,  sup_a[mc][j] otherwise
    /// ds_j = sup_a[mc][j]  if x_j < 0,  inf_a[mc][j] otherwise
    /// g    = weight[mc] · ds    when −infs[mc] ≤ sups[mc]
    ///      = −weight[mc] · dl   otherwise
    /// ```
    pub fn evaluate(&self, x: &Array1<f64>) -> Evaluation {
        let abs_x = x.mapv(f64::abs);
        let ac_x = self.cr.ac.dot(x);
        let ar_absx = self.cr.ar.dot(&abs_x);

        let n = x.len();
        let m = self.cr.bc.len();
        let mut margins = Array1::zeros(m);
        let mut infs = Array1::zeros(m);
        let mut sups = Array1::zeros(m);
        for i in 0..m {
            infs[i] = self.cr.bc[i] - (ac_x[i] + ar_absx[i]);
            sups[i] = self.cr.bc[i] - (ac_x[i] - ar_absx[i]);
            margins[i] = self.weight[i] * (self.cr.br[i] - infs[i].abs().max(sups[i].abs()));
        }

        // First index attaining the minimum; ties must resolve low.
        let mut mc = 0;
        let mut value = margins[0];
        for i in 1..m {
            if margins[i] < value {
                value = margins[i];
                mc = i;
            }
        }

        let inf_row = self.system.inf_a().row(mc);
        let sup_row = self.system.sup_a().row(mc);
        let mut supergradient = Array1::zeros(n);
        let w = self.weight[mc];
        if -infs[mc] <= sups[mc] {
            for j in 0..n {
                let ds = if x[j] < 0.0 { sup_row[j] } else { inf_row[j] };
                supergradient[j] = w * ds;
            }
        } else {
            for j in 0..n {
                let dl = if x[j] < 0.0 { inf_row[j] } else { sup_row[j] };
                supergradient[j] = -w * dl;
            }
        }

        Evaluation { value, supergradient, margins }
    }
}
