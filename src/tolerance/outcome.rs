//! Solver results: termination codes, the iteration log, and the ranked
//! per-equation margins.
//!
//! Exactly one [`TerminationCode`] is produced per run; the codes are
//! mutually exclusive and always reported. Algorithmic non-convergence
//! (`IterationLimit`, `LineSearchFailure`) still returns a best-effort
//! [`TolOutcome`] — callers branch on the code, never on result presence.
use std::collections::BTreeMap;

use ndarray::Array1;

/// Reason the ascent stopped. Numeric codes follow the published
/// convention of the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationCode {
    /// The summed best-value change over the convergence window fell below
    /// `tol_f` (code 1).
    FunctionalStable,
    /// The supergradient norm fell below `tol_g` (code 2).
    GradientNorm,
    /// The argument variation of a line search fell below `tol_x` (code 3).
    ArgumentStable,
    /// The outer-iteration cap was reached (code 4).
    IterationLimit,
    /// A line search exhausted its 500-evaluation budget without the ascent
    /// direction turning downhill (code 5). Fatal for further progress, but
    /// the best point found so far is still returned.
    LineSearchFailure,
}

impl TerminationCode {
    /// Numeric code as published: 1 through 5 in declaration order.
    pub fn code(&self) -> u8 {
        match self {
            TerminationCode::FunctionalStable => 1,
            TerminationCode::GradientNorm => 2,
            TerminationCode::ArgumentStable => 3,
            TerminationCode::IterationLimit => 4,
            TerminationCode::LineSearchFailure => 5,
        }
    }
}

impl std::fmt::Display for TerminationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TerminationCode::FunctionalStable => "functional value stabilized",
            TerminationCode::GradientNorm => "supergradient norm below tolerance",
            TerminationCode::ArgumentStable => "argument variation below tolerance",
            TerminationCode::IterationLimit => "iteration limit reached",
            TerminationCode::LineSearchFailure => "no maximum found along the ascent direction",
        };
        write!(f, "{name}")
    }
}

/// One entry of the iteration log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    /// Functional value at the last evaluated point of the iteration.
    pub value: f64,
    /// Best functional value found so far.
    pub best_value: f64,
    /// Line-search evaluations spent in this iteration.
    pub steps: usize,
    /// Cumulative functional evaluations.
    pub total_steps: usize,
}

/// Generating-functional value at the maximizer, tagged with its 1-based
/// equation number (the customary presentation of the system's rows).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationMargin {
    pub equation: usize,
    pub value: f64,
}

/// Final result of a tolerance-functional maximization.
#[derive(Debug, Clone, PartialEq)]
pub struct TolOutcome {
    /// Maximum of the recognizing functional. Non-negative iff the
    /// tolerable solution set is non-empty.
    pub tolmax: f64,
    /// The maximizing point; lies inside the tolerable solution set when
    /// `tolmax ≥ 0`.
    pub argmax: Array1<f64>,
    /// Per-equation margins at `argmax`, sorted ascending — the worst
    /// satisfied equations come first.
    pub envs: Vec<EquationMargin>,
    /// Why the ascent stopped.
    pub code: TerminationCode,
    /// Outer-iteration log: iteration 0, every `iprn`-th iteration when
    /// `iprn > 0`, and the terminating iteration.
    pub log: BTreeMap<usize, IterationRecord>,
    /// Total functional evaluations across the run.
    pub ncals: usize,
    /// Advisory flag: `tolmax` is negative but so close to zero relative
    /// to the argument tolerance (`|tolmax / tol_x| < 10`) that emptiness
    /// is not proven. Re-run with tighter `tol_f`/`tol_x` to disambiguate.
    pub inconclusive: bool,
}

impl TolOutcome {
    /// True when the tolerable solution set is non-empty and `argmax` is a
    /// tolerable solution.
    pub fn is_solvable(&self) -> bool {
        self.tolmax >= 0.0
    }
}

/// Rank the margins ascending, attaching 1-based equation numbers.
///
/// The sort is stable, so equations with equal margins keep their original
/// order and repeated runs produce identical rankings.
pub(crate) fn rank_margins(margins: &Array1<f64>) -> Vec<EquationMargin> {
    let mut envs: Vec<EquationMargin> = margins
        .iter()
        .enumerate()
        .map(|(i, &value)| EquationMargin { equation: i + 1, value })
        .collect();
    envs.sort_by(|a, b| a.value.partial_cmp(&b.value).expect("margins are finite"));
    envs
}

/// Advisory precision-limit condition of a negative maximum.
pub(crate) fn is_inconclusive(tolmax: f64, tol_x: f64) -> bool {
    tolmax < 0.0 && (tolmax / tol_x).abs() < 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Margin ranking (ascending order, 1-based tags, stability on ties).
    // - The numeric termination codes.
    // - The advisory precision-limit predicate.
    //
    // They intentionally DO NOT cover:
    // - Producing outcomes from a real run — the solver and integration
    //   tests do that.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify ascending ranking with original equation numbers attached.
    //
    // Given
    // -----
    // - margins = (0.3, −0.7, 0.1).
    //
    // Expect
    // ------
    // - envs = [(2, −0.7), (3, 0.1), (1, 0.3)].
    fn rank_margins_sorts_worst_first_with_one_based_tags() {
        let margins = array![0.3, -0.7, 0.1];
        let envs = rank_margins(&margins);
        assert_eq!(envs.len(), 3);
        assert_eq!((envs[0].equation, envs[0].value), (2, -0.7));
        assert_eq!((envs[1].equation, envs[1].value), (3, 0.1));
        assert_eq!((envs[2].equation, envs[2].value), (1, 0.3));
    }

    #[test]
    // Purpose
    // -------
    // Verify that tied margins keep their original equation order.
    //
    // Given
    // -----
    // - margins = (0.5, 0.5, −1.0).
    //
    // Expect
    // ------
    // - envs = [(3, −1.0), (1, 0.5), (2, 0.5)].
    fn rank_margins_is_stable_on_ties() {
        let margins = array![0.5, 0.5, -1.0];
        let envs = rank_margins(&margins);
        assert_eq!(envs[0].equation, 3);
        assert_eq!(envs[1].equation, 1);
        assert_eq!(envs[2].equation, 2);
    }

    #[test]
    // Purpose
    // -------
    // Verify the published numeric codes.
    //
    // Given
    // -----
    // - All five termination variants.
    //
    // Expect
    // ------
    // - Codes 1..=5 in order.
    fn termination_codes_follow_published_numbering() {
        assert_eq!(TerminationCode::FunctionalStable.code(), 1);
        assert_eq!(TerminationCode::GradientNorm.code(), 2);
        assert_eq!(TerminationCode::ArgumentStable.code(), 3);
        assert_eq!(TerminationCode::IterationLimit.code(), 4);
        assert_eq!(TerminationCode::LineSearchFailure.code(), 5);
    }

    #[test]
    // Purpose
    // -------
    // Verify the advisory predicate fires only for small negative maxima.
    //
    // Given
    // -----
    // - tol_x = 1e-6 with tolmax values −5e-6, −1e-4, and +1e-7.
    //
    // Expect
    // ------
    // - Inconclusive for −5e-6 (ratio 5), conclusive for −1e-4 (ratio 100),
    //   and never inconclusive for a non-negative maximum.
    fn inconclusive_fires_only_near_zero_from_below() {
        assert!(is_inconclusive(-5e-6, 1e-6));
        assert!(!is_inconclusive(-1e-4, 1e-6));
        assert!(!is_inconclusive(1e-7, 1e-6));
    }
}
