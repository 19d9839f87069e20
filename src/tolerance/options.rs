//! Configuration for the tolerance-functional maximizer.
//!
//! - [`Tolerances`]: stopping tolerances and iteration/history limits.
//! - [`StepControl`]: space-dilation coefficient and adaptive step tuning.
//! - [`TolOptions`]: the full per-call configuration record.
//!
//! All numeric fields are validated on construction; a [`TolOptions`] that
//! exists is internally consistent. Options are plain data constructed
//! fresh per call and passed by reference into the solver — nothing is
//! global and nothing is shared across calls.
use ndarray::Array1;

use crate::tolerance::{
    errors::{TolError, TolResult},
    validation::{verify_tol_f, verify_tol_g, verify_tol_x},
};

/// Default cap on outer iterations.
pub const DEFAULT_MAX_ITN: usize = 2000;

/// Default length of the best-value convergence history.
pub const DEFAULT_NSIMS: usize = 30;

/// Default stopping tolerance shared by `epsf`, `epsx`, and `epsg`.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Default space-dilation coefficient.
pub const DEFAULT_ALPHA: f64 = 2.3;

/// Default initial line-search step.
pub const DEFAULT_H0: f64 = 1.0;

/// Default number of consecutive line-search sub-steps before the step
/// grows.
pub const DEFAULT_NH: usize = 3;

/// Default step shrink factor applied after a single-sub-step line search.
pub const DEFAULT_Q1: f64 = 0.9;

/// Default step growth factor applied every `nh` sub-steps.
pub const DEFAULT_Q2: f64 = 1.1;

/// Stopping tolerances and limits for the ascent loop.
///
/// - `tol_f`: terminate when the summed best-value change over the last
///   `nsims` iterations (relative when `|best| > 1`) falls below this.
/// - `tol_x`: terminate when the argument variation of a line search falls
///   below this.
/// - `tol_g`: terminate when the supergradient norm falls below this.
/// - `max_itn`: hard cap on outer iterations.
/// - `nsims`: capacity of the best-value change history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_f: f64,
    pub tol_x: f64,
    pub tol_g: f64,
    pub max_itn: usize,
    pub nsims: usize,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - `tol_f`, `tol_x`, `tol_g` must be **finite and strictly positive**.
    /// - `max_itn` and `nsims` must be `> 0`.
    ///
    /// # Errors
    /// - [`TolError::InvalidTolF`] / [`TolError::InvalidTolX`] /
    ///   [`TolError::InvalidTolG`] for bad tolerances.
    /// - [`TolError::InvalidMaxItn`] / [`TolError::InvalidHistoryLength`]
    ///   for zero limits.
    pub fn new(
        tol_f: f64, tol_x: f64, tol_g: f64, max_itn: usize, nsims: usize,
    ) -> TolResult<Self> {
        verify_tol_f(tol_f)?;
        verify_tol_x(tol_x)?;
        verify_tol_g(tol_g)?;
        if max_itn == 0 {
            return Err(TolError::InvalidMaxItn {
                max_itn,
                reason: "Iteration limit must be greater than zero.",
            });
        }
        if nsims == 0 {
            return Err(TolError::InvalidHistoryLength {
                nsims,
                reason: "History length must be greater than zero.",
            });
        }
        Ok(Self { tol_f, tol_x, tol_g, max_itn, nsims })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            tol_f: DEFAULT_EPS,
            tol_x: DEFAULT_EPS,
            tol_g: DEFAULT_EPS,
            max_itn: DEFAULT_MAX_ITN,
            nsims: DEFAULT_NSIMS,
        }
    }
}

/// Space-dilation and adaptive step-size tuning.
///
/// - `alpha`: dilation coefficient; the transform stretches the metric by
///   `1/alpha` along the supergradient-difference direction.
/// - `h0`: initial line-search step.
/// - `nh`: number of consecutive sub-steps after which the step grows.
/// - `q1`: shrink factor applied when a line search takes exactly one
///   sub-step (overshoot correction).
/// - `q2`: growth factor applied every `nh` sub-steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepControl {
    pub alpha: f64,
    pub h0: f64,
    pub nh: usize,
    pub q1: f64,
    pub q2: f64,
}

impl StepControl {
    /// Construct validated step tuning.
    ///
    /// # Rules
    /// - `alpha` must be finite and `> 1` (a coefficient of one would make
    ///   the dilation a no-op; below one it would contract the wrong way).
    /// - `h0` must be finite and `> 0`.
    /// - `nh` must be `> 0`.
    /// - `q1` must be finite with `0 < q1 ≤ 1`; `q2` finite with `q2 ≥ 1`.
    ///
    /// # Errors
    /// - [`TolError::InvalidDilationCoeff`], [`TolError::InvalidInitialStep`],
    ///   [`TolError::InvalidStepCadence`], or [`TolError::InvalidStepFactor`].
    pub fn new(alpha: f64, h0: f64, nh: usize, q1: f64, q2: f64) -> TolResult<Self> {
        if !alpha.is_finite() || alpha <= 1.0 {
            return Err(TolError::InvalidDilationCoeff {
                alpha,
                reason: "Dilation coefficient must be finite and greater than one.",
            });
        }
        if !h0.is_finite() || h0 <= 0.0 {
            return Err(TolError::InvalidInitialStep {
                h0,
                reason: "Initial step must be finite and positive.",
            });
        }
        if nh == 0 {
            return Err(TolError::InvalidStepCadence {
                nh,
                reason: "Step cadence must be greater than zero.",
            });
        }
        if !q1.is_finite() || q1 <= 0.0 || q1 > 1.0 {
            return Err(TolError::InvalidStepFactor {
                factor: q1,
                reason: "Shrink factor must be finite and lie in (0, 1].",
            });
        }
        if !q2.is_finite() || q2 < 1.0 {
            return Err(TolError::InvalidStepFactor {
                factor: q2,
                reason: "Growth factor must be finite and at least one.",
            });
        }
        Ok(Self { alpha, h0, nh, q1, q2 })
    }
}

impl Default for StepControl {
    fn default() -> Self {
        Self { alpha: DEFAULT_ALPHA, h0: DEFAULT_H0, nh: DEFAULT_NH, q1: DEFAULT_Q1, q2: DEFAULT_Q2 }
    }
}

/// Full solver configuration.
///
/// Fields:
/// - `tols: Tolerances` — stopping tolerances and limits.
/// - `steps: StepControl` — dilation coefficient and step tuning.
/// - `iprn: usize` — progress-protocol cadence; `0` (the default)
///   suppresses printing, `k > 0` prints one protocol line every `k`
///   outer iterations to stderr. The machine-readable iteration log is
///   collected at the same cadence regardless of printing.
/// - `weight: Option<Array1<f64>>` — per-equation weights for the
///   generating functionals; `None` means all ones. Length and positivity
///   are checked against the system at solve time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TolOptions {
    pub tols: Tolerances,
    pub steps: StepControl,
    pub iprn: usize,
    pub weight: Option<Array1<f64>>,
}

impl TolOptions {
    /// Create a new set of solver options.
    ///
    /// Numeric validation happens inside [`Tolerances::new`] and
    /// [`StepControl::new`]; the weight vector is validated against the
    /// system dimensions at solve time.
    pub fn new(
        tols: Tolerances, steps: StepControl, iprn: usize, weight: Option<Array1<f64>>,
    ) -> Self {
        Self { tols, steps, iprn, weight }
    }
}
