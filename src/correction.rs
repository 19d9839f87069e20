//! correction — radius-adjustment drivers for infeasible systems.
//!
//! When the tolerable solution set of a system is empty (`tolmax < 0`),
//! two complementary adjustments can restore solvability: widening the
//! right-hand-side intervals (more slack to contain `Ax`) or narrowing
//! the coefficient intervals (less uncertainty to tolerate). The drivers
//! here apply those adjustments around unchanged midpoints and re-run the
//! solver until it reports a non-empty tolerable solution set.
//!
//! The drivers consume the solver only through its public contract; they
//! hold no optimizer state of their own.
use crate::tolerance::{
    errors::{TolError, TolResult},
    options::TolOptions,
    outcome::TolOutcome,
    solver::maximize,
    system::{CenterRadiusForm, ToleranceSystem},
};

/// Result of a correction run: the adjusted system, the final solver
/// outcome on it, and the number of adjustment rounds spent.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionOutcome {
    pub system: ToleranceSystem,
    pub outcome: TolOutcome,
    pub rounds: usize,
}

/// Widen every right-hand-side interval: same midpoint, radius multiplied
/// by `factor`.
///
/// # Errors
/// - [`TolError::InvalidCorrectionFactor`] unless `factor` is finite and
///   greater than one.
pub fn widen_rhs(system: &ToleranceSystem, factor: f64) -> TolResult<ToleranceSystem> {
    verify_factor(factor)?;
    let cr = CenterRadiusForm::new(system);
    let new_rad = &cr.br * factor;
    ToleranceSystem::from_bounds(
        system.inf_a().clone(),
        system.sup_a().clone(),
        &cr.bc - &new_rad,
        &cr.bc + &new_rad,
    )
}

/// Narrow every coefficient interval: same midpoint, radius divided by
/// `factor`.
///
/// # Errors
/// - [`TolError::InvalidCorrectionFactor`] unless `factor` is finite and
///   greater than one.
pub fn shrink_matrix(system: &ToleranceSystem, factor: f64) -> TolResult<ToleranceSystem> {
    verify_factor(factor)?;
    let cr = CenterRadiusForm::new(system);
    let new_rad = &cr.ar / factor;
    ToleranceSystem::from_bounds(
        &cr.ac - &new_rad,
        &cr.ac + &new_rad,
        system.inf_b().clone(),
        system.sup_b().clone(),
    )
}

/// Alternate matrix narrowing and right-hand-side widening until the
/// solver reports a non-empty tolerable solution set.
///
/// Each round first shrinks the matrix radii by `factor` and re-solves;
/// if the maximum is still negative it widens the rhs radii by `factor`
/// and re-solves again. Both adjustments compound across rounds.
///
/// # Errors
/// - [`TolError::InvalidCorrectionFactor`] for a bad factor.
/// - [`TolError::CorrectionLimit`] when `max_rounds` rounds pass without
///   reaching `tolmax ≥ 0`; the error carries the last maximum seen.
/// - Any structural error from re-solving propagates unchanged.
pub fn correct_until_solvable(
    system: &ToleranceSystem, opts: &TolOptions, factor: f64, max_rounds: usize,
) -> TolResult<CorrectionOutcome> {
    verify_factor(factor)?;
    let mut current = system.clone();
    let mut outcome = maximize(&current, opts)?;
    if outcome.is_solvable() {
        return Ok(CorrectionOutcome { system: current, outcome, rounds: 0 });
    }
    for round in 1..=max_rounds {
        current = shrink_matrix(&current, factor)?;
        outcome = maximize(&current, opts)?;
        if outcome.is_solvable() {
            return Ok(CorrectionOutcome { system: current, outcome, rounds: round });
        }

        current = widen_rhs(&current, factor)?;
        outcome = maximize(&current, opts)?;
        if outcome.is_solvable() {
            return Ok(CorrectionOutcome { system: current, outcome, rounds: round });
        }
    }
    Err(TolError::CorrectionLimit { rounds: max_rounds, tolmax: outcome.tolmax })
}

fn verify_factor(factor: f64) -> TolResult<()> {
    if !factor.is_finite() || factor <= 1.0 {
        return Err(TolError::InvalidCorrectionFactor {
            factor,
            reason: "Correction factor must be finite and greater than one.",
        });
    }
    Ok(())
}
