//! tolerance::solver — subgradient ascent with adaptive space dilation.
//!
//! Purpose
//! -------
//! Maximize the concave, piecewise-linear recognizing functional `Tol(x)`
//! with a generalization of gradient ascent that stretches the search
//! metric along the direction of successive supergradient differences.
//! The dilation improves conditioning on ridge-shaped functionals without
//! any second-derivative information, which is what makes the method
//! practical on strongly non-smooth tolerance problems.
//!
//! Key behaviors
//! -------------
//! - Start from the least-squares solution of the center system
//!   `ac·x = bc` when the center matrix is usably conditioned, from the
//!   zero vector otherwise (handled in `numerics`, never an error).
//! - Run outer iterations of: ascent-direction construction in the
//!   dilated metric, a bounded adaptive line search, the rank-one
//!   dilation update of the transform matrix, and the stopping rules.
//! - Stop for exactly one of five mutually exclusive reasons
//!   ([`TerminationCode`]): supergradient norm, argument variation,
//!   functional stability over a sliding window, the iteration cap, or a
//!   failed line search.
//! - Collect the iteration log and, when `iprn > 0`, print the same
//!   protocol lines to stderr.
//!
//! Invariants & assumptions
//! ------------------------
//! - The center/radius form is computed once per call and never refreshed
//!   mid-run.
//! - All optimizer state (`x`, best point, transform matrix, step size,
//!   convergence window, counters) is local to one `maximize` call;
//!   nothing is shared across calls and repeated runs on identical input
//!   are bit-for-bit identical.
//! - The best value never regresses: it is updated only on strict
//!   improvement during line searches.
//! - A line search that exhausts its evaluation budget terminates the run
//!   with `LineSearchFailure` and leaves the cumulative evaluation
//!   counter at its pre-search value, matching the published algorithm.
//!
//! Conventions
//! -----------
//! - `g0` holds the supergradient at the current point from the previous
//!   evaluation; `b` is the inverse space-transform matrix, identity at
//!   start.
//! - The stability window pushes `|best − previous best|` once per
//!   completed iteration; its sentinel prefill keeps the rule unarmed for
//!   the first `nsims` iterations.
use std::collections::BTreeMap;

use ndarray::{Array1, Array2};

use crate::{
    numerics::{l2_norm, starting_point},
    tolerance::{
        errors::TolResult,
        functional::TolFunctional,
        options::TolOptions,
        outcome::{
            is_inconclusive, rank_margins, IterationRecord, TerminationCode, TolOutcome,
        },
        ring::DeltaRing,
        system::{CenterRadiusForm, ToleranceSystem},
        validation::validate_weight,
    },
};

/// Hard cap on functional evaluations inside one line search.
pub const MAX_LINE_SEARCH_EVALS: usize = 500;

/// Maximize the recognizing functional of an interval linear system.
///
/// Runs the space-dilation subgradient ascent on `Tol(x)` and assembles
/// the final diagnostics: the maximum `tolmax`, the maximizer `argmax`,
/// the per-equation margins ranked worst-first, the termination code, and
/// the iteration log. `tolmax ≥ 0` means the tolerable solution set is
/// non-empty and `argmax` lies inside it.
///
/// The weight vector in `opts` (all ones when absent) is validated against
/// the system before any iteration begins; configuration values were
/// already validated when `opts` was built. Structural failures return an
/// error with no partial result, while algorithmic non-convergence
/// (`IterationLimit`, `LineSearchFailure`) returns a best-effort outcome
/// carrying its code.
///
/// # Errors
/// - [`crate::tolerance::errors::TolError::WeightLengthMismatch`] /
///   [`crate::tolerance::errors::TolError::InvalidWeight`] for a weight
///   vector of the wrong length or with a non-positive component.
pub fn maximize(system: &ToleranceSystem, opts: &TolOptions) -> TolResult<TolOutcome> {
    let m = system.nrows();
    let n = system.ncols();
    let weight = match &opts.weight {
        Some(w) => {
            validate_weight(w, m)?;
            w.clone()
        }
        None => Array1::ones(m),
    };

    let cr = CenterRadiusForm::new(system);
    let functional = TolFunctional::new(system, &cr, &weight);

    let mut x = starting_point(&cr.ac, &cr.bc);
    let mut b: Array2<f64> = Array2::eye(n);
    let mut ring = DeltaRing::new(opts.tols.nsims, f64::MAX);
    let dilation = 1.0 / opts.steps.alpha - 1.0;

    let mut eval = functional.evaluate(&x);
    let mut g0 = eval.supergradient.clone();
    let mut best_f = eval.value;
    let mut best_x = x.clone();
    let mut hs = opts.steps.h0;
    let mut cal = 1_usize;
    let mut ncals = 1_usize;

    let mut log = BTreeMap::new();
    log.insert(
        0,
        IterationRecord { value: eval.value, best_value: best_f, steps: cal, total_steps: ncals },
    );
    if opts.iprn > 0 {
        print_protocol_header();
        print_protocol_line(0, eval.value, best_f, cal, ncals);
    }

    let mut code = TerminationCode::IterationLimit;
    let mut last_itn = 0;
    for itn in 1..=opts.tols.max_itn {
        last_itn = itn;
        let prev_best = best_f;

        // Stop on a vanishing supergradient.
        if l2_norm(&g0) < opts.tols.tol_g {
            code = TerminationCode::GradientNorm;
            break;
        }

        // Ascent direction through the dilated metric.
        let g1t = b.t().dot(&g0);
        let g = b.dot(&g1t) / l2_norm(&g1t);
        let normg = l2_norm(&g);

        // One-dimensional ascent along g with adaptive step growth.
        cal = 0;
        let mut deltax = 0.0;
        let mut slope = 1.0;
        while slope > 0.0 && cal <= MAX_LINE_SEARCH_EVALS {
            cal += 1;
            x.scaled_add(hs, &g);
            deltax += hs * normg;
            eval = functional.evaluate(&x);
            if eval.value > best_f {
                best_f = eval.value;
                best_x = x.clone();
            }
            if cal % opts.steps.nh == 0 {
                hs *= opts.steps.q2;
            }
            slope = g.dot(&eval.supergradient);
        }
        if cal > MAX_LINE_SEARCH_EVALS {
            code = TerminationCode::LineSearchFailure;
            break;
        }
        // A single sub-step means the previous step overshot.
        if cal == 1 {
            hs *= opts.steps.q1;
        }
        ncals += cal;

        if opts.iprn > 0 && itn % opts.iprn == 0 {
            log.insert(
                itn,
                IterationRecord {
                    value: eval.value,
                    best_value: best_f,
                    steps: cal,
                    total_steps: ncals,
                },
            );
            print_protocol_line(itn, eval.value, best_f, cal, ncals);
        }

        // Stop on a stalled argument.
        if deltax < opts.tols.tol_x {
            code = TerminationCode::ArgumentStable;
            break;
        }

        // Rank-one dilation along the supergradient difference. A zero
        // difference leaves the transform unchanged for this iteration.
        let dg = b.t().dot(&(&eval.supergradient - &g0));
        let dg_norm = l2_norm(&dg);
        if dg_norm > 0.0 {
            let xi = dg / dg_norm;
            let bxi = b.dot(&xi);
            for i in 0..n {
                for j in 0..n {
                    b[[i, j]] += dilation * bxi[i] * xi[j];
                }
            }
        }
        g0 = eval.supergradient.clone();

        // Stop when the best value has stalled over the sliding window,
        // relatively for large values and absolutely otherwise.
        ring.push((best_f - prev_best).abs());
        let history = ring.sum();
        let deltaf = if best_f.abs() > 1.0 { history / best_f.abs() } else { history };
        if deltaf < opts.tols.tol_f {
            code = TerminationCode::FunctionalStable;
            break;
        }
    }

    log.entry(last_itn).or_insert(IterationRecord {
        value: eval.value,
        best_value: best_f,
        steps: cal,
        total_steps: ncals,
    });
    if opts.iprn > 0 && last_itn % opts.iprn != 0 {
        print_protocol_line(last_itn, eval.value, best_f, cal, ncals);
    }

    // Margins are reported at the maximizer, not at the last probe point.
    let final_eval = functional.evaluate(&best_x);
    let envs = rank_margins(&final_eval.margins);
    let inconclusive = is_inconclusive(best_f, opts.tols.tol_x);

    Ok(TolOutcome {
        tolmax: best_f,
        argmax: best_x,
        envs,
        code,
        log,
        ncals,
        inconclusive,
    })
}

// ---- Helper methods ----

fn print_protocol_header() {
    eprintln!("Maximization protocol for the recognizing functional Tol");
    eprintln!("-------------------------------------------------------------");
    eprintln!("{:>5} {:>15} {:>15} {:>10} {:>8}", "itn", "Tol(x)", "Tol(xx)", "evals/itn", "evals");
    eprintln!("-------------------------------------------------------------");
}

fn print_protocol_line(itn: usize, value: f64, best: f64, cal: usize, ncals: usize) {
    eprintln!("{itn:>5} {value:>15.6} {best:>15.6} {cal:>10} {ncals:>8}");
}
