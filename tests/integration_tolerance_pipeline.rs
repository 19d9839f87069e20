//! Integration tests for the tolerance-problem pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: from validated bound arrays, through
//!   the recognizing-functional maximization, to the ranked margins and
//!   termination diagnostics.
//! - Exercise the published 2×2 reference scenario and realistic
//!   variations (weights, tightened tolerances, infeasible systems)
//!   rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `tolerance::system`:
//!   - `ToleranceSystem::from_bounds` validation failures.
//! - `tolerance::solver`:
//!   - Convergence-driven termination on the reference system.
//!   - Agreement between default and tightened tolerance runs.
//!   - Bit-for-bit determinism across repeated runs.
//!   - Uniform-weight invariance of the maximizer.
//!   - Monotone best-value iteration log.
//! - `tolerance::outcome`:
//!   - Margin ranking and emptiness reporting.
//! - `correction`:
//!   - Radius adjustment restoring solvability.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (interval
//!   arithmetic, ring buffer, starting point) — covered by unit tests.
//! - Python bindings — expected to be tested from the Python side.
use ndarray::{array, Array1, Array2};
use interval_tolerance::{
    correction::correct_until_solvable,
    tolerance::{
        maximize, StepControl, TerminationCode, TolError, TolOptions, ToleranceSystem,
        Tolerances,
    },
};

/// Purpose
/// -------
/// Provide the published 2×2 reference system used across these tests.
///
/// Configuration
/// -------------
/// - inf_a = [[0.65, 0.70], [0.75, 0.70]], sup_a = [[1.25, 1.30], [1.35, 1.30]]
///   (all coefficient radii 0.3).
/// - inf_b = [2.75, 2.85], sup_b = [3.15, 3.25] (rhs radii 0.2).
///
/// Invariants
/// ----------
/// - The center system `ac·x = bc` has the unique solution (1, 2), which
///   is also the functional's maximizer; the tolerable solution set is
///   empty (maximum ≈ −0.7).
fn reference_system() -> ToleranceSystem {
    let inf_a = array![[0.65, 0.70], [0.75, 0.70]];
    let sup_a = array![[1.25, 1.30], [1.35, 1.30]];
    let inf_b = array![2.75, 2.85];
    let sup_b = array![3.15, 3.25];
    ToleranceSystem::from_bounds(inf_a, sup_a, inf_b, sup_b)
        .expect("reference bounds are well-formed")
}

/// Purpose
/// -------
/// Build options with the given tolerances and otherwise default tuning.
///
/// Parameters
/// ----------
/// - `eps`: value used for all three stopping tolerances.
/// - `weight`: optional per-equation weights.
fn options_with_eps(eps: f64, weight: Option<Array1<f64>>) -> TolOptions {
    let tols = Tolerances::new(eps, eps, eps, 2000, 30)
        .expect("Tolerances::new should accept positive tolerances");
    TolOptions::new(tols, StepControl::default(), 0, weight)
}

#[test]
// Purpose
// -------
// Run the published 2×2 scenario end to end and check the termination
// code, the agreement with a tightened-tolerance reference run, and the
// reported emptiness.
//
// Given
// -----
// - The reference system with default parameters, and a second run with
//   epsf = epsx = epsg = 1e-8.
//
// Expect
// ------
// - Termination by one of {GradientNorm, FunctionalStable, ArgumentStable}
//   (not IterationLimit or LineSearchFailure) on both runs.
// - The two maxima agree within 1e-4.
// - tolmax < 0 (empty tolerable set) near −0.7, with argmax near (1, 2).
fn reference_scenario_terminates_by_convergence() {
    let system = reference_system();

    let default_run = maximize(&system, &TolOptions::default()).unwrap();
    let tight_run = maximize(&system, &options_with_eps(1e-8, None)).unwrap();

    for outcome in [&default_run, &tight_run] {
        assert!(
            matches!(
                outcome.code,
                TerminationCode::GradientNorm
                    | TerminationCode::FunctionalStable
                    | TerminationCode::ArgumentStable
            ),
            "unexpected termination: {:?}",
            outcome.code
        );
    }
    assert!((default_run.tolmax - tight_run.tolmax).abs() < 1e-4);
    assert!(!default_run.is_solvable());
    assert!((default_run.tolmax - (-0.7)).abs() < 1e-3, "tolmax = {}", default_run.tolmax);
    assert!((default_run.argmax[0] - 1.0).abs() < 1e-2);
    assert!((default_run.argmax[1] - 2.0).abs() < 1e-2);
}

#[test]
// Purpose
// -------
// Verify bit-for-bit determinism: identical inputs and parameters yield
// identical results across repeated runs.
//
// Given
// -----
// - Two independent runs on the reference system with default options.
//
// Expect
// ------
// - tolmax, argmax, envs, code, log, and ncals are exactly equal.
fn repeated_runs_are_bit_for_bit_identical() {
    let system = reference_system();
    let first = maximize(&system, &TolOptions::default()).unwrap();
    let second = maximize(&system, &TolOptions::default()).unwrap();

    assert_eq!(first.tolmax.to_bits(), second.tolmax.to_bits());
    assert_eq!(first.argmax.len(), second.argmax.len());
    for (a, b) in first.argmax.iter().zip(second.argmax.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
    assert_eq!(first.code, second.code);
    assert_eq!(first.envs.len(), second.envs.len());
    for (a, b) in first.envs.iter().zip(second.envs.iter()) {
        assert_eq!(a.equation, b.equation);
        assert_eq!(a.value.to_bits(), b.value.to_bits());
    }
    assert_eq!(first.log, second.log);
    assert_eq!(first.ncals, second.ncals);
}

#[test]
// Purpose
// -------
// Verify uniform-weight invariance: scaling the all-ones weight vector by
// a positive constant scales the functional but moves neither the
// maximizer nor the sign of the maximum.
//
// Given
// -----
// - The reference system solved with weights None and 3·ones.
//
// Expect
// ------
// - argmax agrees within 1e-6 per coordinate; tolmax of the weighted run
//   is within 1e-6·3 of three times the unweighted one; signs agree.
fn uniform_weight_scaling_leaves_argmax_in_place() {
    let system = reference_system();
    let unweighted = maximize(&system, &TolOptions::default()).unwrap();
    let weighted =
        maximize(&system, &options_with_eps(1e-6, Some(Array1::from_elem(2, 3.0)))).unwrap();

    for (a, b) in unweighted.argmax.iter().zip(weighted.argmax.iter()) {
        assert!((a - b).abs() < 1e-6);
    }
    assert_eq!(unweighted.tolmax < 0.0, weighted.tolmax < 0.0);
    assert!((weighted.tolmax - 3.0 * unweighted.tolmax).abs() < 3e-6);
}

#[test]
// Purpose
// -------
// Verify the empty-set scenario: a right-hand side far below any feasible
// containment makes the maximum clearly negative and conclusive.
//
// Given
// -----
// - The reference coefficient matrix with rhs intervals [1.0, 1.1] on
//   both equations: reaching centers near 1.05 forces |x| large enough
//   that the coefficient radii alone overwhelm the 0.05 rhs slack.
//
// Expect
// ------
// - tolmax < 0, not solvable, and not in the advisory precision band.
fn shrunken_rhs_yields_negative_maximum() {
    let inf_a = array![[0.65, 0.70], [0.75, 0.70]];
    let sup_a = array![[1.25, 1.30], [1.35, 1.30]];
    let inf_b = array![1.0, 1.0];
    let sup_b = array![1.1, 1.1];
    let system = ToleranceSystem::from_bounds(inf_a, sup_a, inf_b, sup_b).unwrap();

    let outcome = maximize(&system, &TolOptions::default()).unwrap();

    assert!(outcome.tolmax < 0.0);
    assert!(!outcome.is_solvable());
    assert!(!outcome.inconclusive);
}

#[test]
// Purpose
// -------
// Verify that the iteration log never regresses in best value and that
// its per-iteration records carry consistent counters.
//
// Given
// -----
// - The reference system solved with iprn = 1, so every outer iteration
//   is recorded.
//
// Expect
// ------
// - best_value is non-decreasing in iteration order.
// - total_steps is non-decreasing and ends at the outcome's ncals.
// - Entry 0 exists.
fn iteration_log_best_value_is_monotone() {
    let system = reference_system();
    let tols = Tolerances::default();
    let opts = TolOptions::new(tols, StepControl::default(), 1, None);

    let outcome = maximize(&system, &opts).unwrap();

    assert!(outcome.log.contains_key(&0));
    let records: Vec<_> = outcome.log.values().collect();
    for pair in records.windows(2) {
        assert!(pair[1].best_value >= pair[0].best_value);
        assert!(pair[1].total_steps >= pair[0].total_steps);
    }
    let last = records.last().unwrap();
    assert_eq!(last.total_steps, outcome.ncals);
}

#[test]
// Purpose
// -------
// Verify the ranked margins: ascending order, 1-based equation tags, one
// entry per equation, and the minimum equal to tolmax at the maximizer.
//
// Given
// -----
// - A solvable 3×2 system with distinct per-equation slack.
//
// Expect
// ------
// - envs sorted ascending, equations {1, 2, 3} each present, and
//   envs[0].value equal to tolmax within 1e-9.
fn margins_are_ranked_worst_first() {
    let inf_a = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    let sup_a = inf_a.clone();
    let inf_b = array![0.0, -1.0, -1.5];
    let sup_b = array![2.0, 3.0, 4.5];
    let system = ToleranceSystem::from_bounds(inf_a, sup_a, inf_b, sup_b).unwrap();

    let outcome = maximize(&system, &TolOptions::default()).unwrap();

    assert!(outcome.is_solvable());
    assert_eq!(outcome.envs.len(), 3);
    let mut seen: Vec<usize> = outcome.envs.iter().map(|e| e.equation).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3]);
    for pair in outcome.envs.windows(2) {
        assert!(pair[0].value <= pair[1].value);
    }
    assert!((outcome.envs[0].value - outcome.tolmax).abs() < 1e-9);
}

#[test]
// Purpose
// -------
// Verify fail-fast input validation through the public entry path.
//
// Given
// -----
// - A lower-bound matrix with one extra row, then an rhs pairing whose
//   lower bound exceeds its upper bound.
//
// Expect
// ------
// - MatrixRowMismatch and InvalidRhsInterval respectively, before any
//   solving.
fn malformed_inputs_fail_before_any_iteration() {
    let sup_a = array![[1.25, 1.30], [1.35, 1.30]];
    let extra_row: Array2<f64> = array![[0.65, 0.70], [0.75, 0.70], [0.0, 0.0]];
    let err = ToleranceSystem::from_bounds(
        extra_row,
        sup_a.clone(),
        array![2.75, 2.85],
        array![3.15, 3.25],
    )
    .unwrap_err();
    assert_eq!(err, TolError::MatrixRowMismatch { inf_rows: 3, sup_rows: 2 });

    let err = ToleranceSystem::from_bounds(
        array![[0.65, 0.70], [0.75, 0.70]],
        sup_a,
        array![2.0, 1.0],
        array![3.0, 0.5],
    )
    .unwrap_err();
    assert_eq!(err, TolError::InvalidRhsInterval { index: 1, inf: 1.0, sup: 0.5 });
}

#[test]
// Purpose
// -------
// Verify the correction driver on an infeasible system end to end: the
// adjusted system becomes solvable while midpoints stay put.
//
// Given
// -----
// - The reference system (empty tolerable set), corrected with factor 2
//   and up to 20 rounds under default options.
//
// Expect
// ------
// - A solvable corrected outcome within the round budget; rhs midpoints
//   of the corrected system equal the originals.
fn correction_driver_recovers_reference_system() {
    let system = reference_system();
    let opts = TolOptions::default();

    let corrected = correct_until_solvable(&system, &opts, 2.0, 20).unwrap();

    assert!(corrected.outcome.is_solvable());
    assert!(corrected.rounds >= 1);
    for i in 0..2 {
        let mid = 0.5 * (corrected.system.inf_b()[i] + corrected.system.sup_b()[i]);
        let orig_mid = 0.5 * (system.inf_b()[i] + system.sup_b()[i]);
        assert!((mid - orig_mid).abs() < 1e-9);
    }
}
