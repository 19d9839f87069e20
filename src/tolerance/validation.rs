//! Validation helpers for the tolerance solver.
//!
//! This module centralizes the consistency checks used across the solver
//! interface:
//!
//! - **Tolerance checks**: [`verify_tol_f`], [`verify_tol_x`],
//!   [`verify_tol_g`] ensure the stopping tolerances are finite and
//!   strictly positive.
//! - **Weight validation**: [`validate_weight`] enforces correct length
//!   and strictly positive, finite components.
//!
//! The helpers return domain-specific [`TolError`] variants so higher-level
//! code reports failures uniformly.
use ndarray::Array1;

use crate::tolerance::errors::{TolError, TolResult};

/// Validate the functional-change tolerance `epsf`.
///
/// # Errors
/// Returns [`TolError::InvalidTolF`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_f(tol: f64) -> TolResult<()> {
    if !tol.is_finite() {
        return Err(TolError::InvalidTolF { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(TolError::InvalidTolF { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the argument-variation tolerance `epsx`.
///
/// # Errors
/// Returns [`TolError::InvalidTolX`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_x(tol: f64) -> TolResult<()> {
    if !tol.is_finite() {
        return Err(TolError::InvalidTolX { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(TolError::InvalidTolX { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the supergradient-norm tolerance `epsg`.
///
/// # Errors
/// Returns [`TolError::InvalidTolG`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_g(tol: f64) -> TolResult<()> {
    if !tol.is_finite() {
        return Err(TolError::InvalidTolG { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(TolError::InvalidTolG { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate a per-equation weight vector against the equation count.
///
/// Checks:
/// - `weight.len() == m`,
/// - every component is finite and strictly positive.
///
/// # Errors
/// - [`TolError::WeightLengthMismatch`] if the length does not match `m`.
/// - [`TolError::InvalidWeight`] with the index/value of the first
///   offending component.
pub fn validate_weight(weight: &Array1<f64>, m: usize) -> TolResult<()> {
    if weight.len() != m {
        return Err(TolError::WeightLengthMismatch { expected: m, actual: weight.len() });
    }
    for (index, &value) in weight.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(TolError::InvalidWeight { index, value });
        }
    }
    Ok(())
}
