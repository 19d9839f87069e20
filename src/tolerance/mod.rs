//! tolerance — the tolerance-problem core: system, functional, solver.
//!
//! Purpose
//! -------
//! Decide whether an interval linear system `Ax = b` admits a tolerable
//! solution and find the point of maximal robustness. The module wires
//! together the validated system representation, the recognizing
//! functional, and the space-dilation subgradient maximizer, and exposes
//! one high-level entrypoint, [`maximize`].
//!
//! Key behaviors
//! -------------
//! - Validate all structural input (shapes, interval well-formedness,
//!   weights) before any numeric work; violations fail the call with a
//!   descriptive [`TolError`] and no partial result.
//! - Maximize `Tol(x)` and report `(tolmax, argmax, envs, code, log)`;
//!   the sign of `tolmax` decides non-emptiness of the tolerable solution
//!   set.
//! - Treat algorithmic non-convergence as a normal outcome carried by the
//!   termination code, never as an error.
//!
//! Conventions
//! -----------
//! - Vectors and matrices are `ndarray` containers over `f64`; the
//!   decomposition work in `numerics` is the only place other
//!   representations appear.
//! - Configuration arrives as a validated [`TolOptions`] constructed
//!   fresh per call; no defaults are shared across calls.
//! - Public entrypoints that can fail return [`TolResult<T>`]; callers
//!   never see interval-layer errors directly.
//!
//! Downstream usage
//! ----------------
//! - Drivers build a [`ToleranceSystem`] (usually via
//!   [`ToleranceSystem::from_bounds`]), choose [`TolOptions`], and call
//!   [`maximize`].
//! - The correction drivers in [`crate::correction`] consume the same
//!   surface to restore solvability of infeasible systems.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules cover evaluation closed forms,
//!   tie-breaking, validation, ring-buffer behavior, and small ascent
//!   runs; the end-to-end scenarios live in `tests/`.

pub mod errors;
pub mod functional;
pub mod options;
pub mod outcome;
pub mod ring;
pub mod solver;
pub mod system;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{TolError, TolResult};
pub use self::functional::{Evaluation, TolFunctional};
pub use self::options::{StepControl, TolOptions, Tolerances};
pub use self::outcome::{EquationMargin, IterationRecord, TerminationCode, TolOutcome};
pub use self::solver::{maximize, MAX_LINE_SEARCH_EVALS};
pub use self::system::{CenterRadiusForm, ToleranceSystem};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::options::{StepControl, TolOptions, Tolerances};
    pub use super::outcome::{TerminationCode, TolOutcome};
    pub use super::solver::maximize;
    pub use super::system::ToleranceSystem;
}
