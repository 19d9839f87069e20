//! interval_tolerance — tolerance-problem solver for interval linear systems.
//!
//! Purpose
//! -------
//! Decide whether an interval linear system `Ax = b` admits a tolerable
//! solution — a point `x` with `Ax ⊆ b` for every realization of `A`
//! inside its bounds — and find the point of maximal robustness by
//! maximizing the recognizing functional `Tol(x)`. Serve as the crate
//! root for Rust callers and, behind the `python-bindings` feature, as
//! the PyO3 bridge exposing the solver to Python drivers.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`interval`, `tolerance`,
//!   `numerics`, `correction`) as the public crate surface.
//! - When `python-bindings` is enabled, define the `TolSolution` wrapper
//!   class and the `tolsolvty` function for the `_interval_tolerance`
//!   extension module, mirroring the call convention of the classical
//!   procedure.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work lives in the inner Rust modules; this file
//!   performs only FFI glue, input extraction, and error mapping.
//! - Domain errors cross the PyO3 boundary as `ValueError`; algorithmic
//!   non-convergence is a termination code on the result object, never an
//!   exception.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on the inner modules directly
//!   (typically `tolerance::prelude`) and can ignore the PyO3 items.
//! - Python callers import the compiled `_interval_tolerance` module and
//!   receive `TolSolution` objects with scalar and array accessors.

pub mod correction;
pub mod interval;
pub mod numerics;
pub mod tolerance;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    tolerance::{outcome::TolOutcome, solver::maximize, system::ToleranceSystem},
    utils::{build_tol_options, extract_f64_matrix, extract_f64_vector, tol_err_to_py},
};

/// TolSolution — Python-facing result of a tolerance maximization.
///
/// Holds the full [`TolOutcome`] and exposes scalar and array accessors as
/// Python properties. Instances are produced by [`tolsolvty`]; user code
/// never constructs them directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "interval_tolerance")]
pub struct TolSolution {
    /// The underlying Rust outcome.
    inner: TolOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl TolSolution {
    /// Maximum of the recognizing functional; non-negative iff the
    /// tolerable solution set is non-empty.
    #[getter]
    pub fn tolmax(&self) -> f64 {
        self.inner.tolmax
    }

    /// The maximizing point.
    #[getter]
    pub fn argmax(&self) -> Vec<f64> {
        self.inner.argmax.to_vec()
    }

    /// Per-equation margins at the maximizer as `(equation, value)` pairs,
    /// worst equations first. Equation numbers are 1-based.
    #[getter]
    pub fn envs(&self) -> Vec<(usize, f64)> {
        self.inner.envs.iter().map(|e| (e.equation, e.value)).collect()
    }

    /// Numeric termination code (1–5).
    #[getter]
    pub fn code(&self) -> u8 {
        self.inner.code.code()
    }

    /// Human-readable termination reason.
    #[getter]
    pub fn status(&self) -> String {
        self.inner.code.to_string()
    }

    /// True when the tolerable solution set is non-empty.
    #[getter]
    pub fn solvable(&self) -> bool {
        self.inner.is_solvable()
    }

    /// True when a negative maximum sits within the precision-limit band
    /// and emptiness is not proven; re-run with tighter tolerances.
    #[getter]
    pub fn inconclusive(&self) -> bool {
        self.inner.inconclusive
    }

    /// Iteration log as `(iteration, (value, best_value, steps,
    /// total_steps))` tuples in iteration order.
    #[getter]
    pub fn iteration_log(&self) -> Vec<(usize, (f64, f64, usize, usize))> {
        self.inner
            .log
            .iter()
            .map(|(&itn, r)| (itn, (r.value, r.best_value, r.steps, r.total_steps)))
            .collect()
    }

    /// Total functional evaluations across the run.
    #[getter]
    pub fn ncals(&self) -> usize {
        self.inner.ncals
    }
}

/// Maximize the recognizing functional of an interval linear system.
///
/// Mirrors the classical call convention: the four bound arrays are
/// required, everything else is optional with the published defaults.
/// Structural problems (shape mismatches, inverted bounds, bad weights or
/// tolerances) raise `ValueError`; non-convergence is reported through
/// the `code` property of the returned [`TolSolution`].
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (inf_a, sup_a, inf_b, sup_b, iprn = 0, weight = None, epsf = 1e-6,
                 epsx = 1e-6, epsg = 1e-6, maxitn = 2000),
    text_signature = "(inf_a, sup_a, inf_b, sup_b, /, iprn=0, weight=None, epsf=1e-6, \
                      epsx=1e-6, epsg=1e-6, maxitn=2000)"
)]
#[allow(clippy::too_many_arguments)]
pub fn tolsolvty<'py>(
    py: Python<'py>, inf_a: &Bound<'py, PyAny>, sup_a: &Bound<'py, PyAny>,
    inf_b: &Bound<'py, PyAny>, sup_b: &Bound<'py, PyAny>, iprn: usize,
    weight: Option<&Bound<'py, PyAny>>, epsf: f64, epsx: f64, epsg: f64, maxitn: usize,
) -> PyResult<TolSolution> {
    let inf_a = extract_f64_matrix(py, inf_a)?;
    let sup_a = extract_f64_matrix(py, sup_a)?;
    let inf_b = extract_f64_vector(py, inf_b)?;
    let sup_b = extract_f64_vector(py, sup_b)?;

    let system =
        ToleranceSystem::from_bounds(inf_a, sup_a, inf_b, sup_b).map_err(tol_err_to_py)?;
    let opts = build_tol_options(py, iprn, weight, epsf, epsx, epsg, maxitn)?;
    let outcome = maximize(&system, &opts).map_err(tol_err_to_py)?;
    Ok(TolSolution { inner: outcome })
}

/// _interval_tolerance — PyO3 module initializer for the Python extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _interval_tolerance<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<TolSolution>()?;
    m.add_function(wrap_pyfunction!(tolsolvty, m)?)?;
    Ok(())
}
