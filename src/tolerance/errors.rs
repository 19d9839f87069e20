use crate::interval::errors::IntervalError;

/// Crate-wide result alias for tolerance-solver operations.
pub type TolResult<T> = Result<T, TolError>;

#[derive(Debug, Clone, PartialEq)]
pub enum TolError {
    // ---- Dimension mismatch ----
    /// Lower- and upper-bound matrices have different row counts.
    MatrixRowMismatch {
        inf_rows: usize,
        sup_rows: usize,
    },

    /// Lower- and upper-bound matrices have different column counts.
    MatrixColumnMismatch {
        inf_cols: usize,
        sup_cols: usize,
    },

    /// Lower- and upper-bound right-hand-side vectors have different lengths.
    RhsLengthMismatch {
        inf_len: usize,
        sup_len: usize,
    },

    /// Right-hand-side length does not equal the matrix row count.
    SystemShapeMismatch {
        rows: usize,
        rhs_len: usize,
    },

    // ---- Invalid intervals ----
    /// A matrix element has its lower bound above its upper bound.
    InvalidMatrixInterval {
        row: usize,
        col: usize,
        inf: f64,
        sup: f64,
    },

    /// A right-hand-side component has its lower bound above its upper bound.
    InvalidRhsInterval {
        index: usize,
        inf: f64,
        sup: f64,
    },

    /// A matrix entry bound is NaN or infinite.
    NonFiniteMatrixEntry {
        row: usize,
        col: usize,
        value: f64,
    },

    /// A right-hand-side bound is NaN or infinite.
    NonFiniteRhsEntry {
        index: usize,
        value: f64,
    },

    /// A scalar interval was ill-formed (carried over from the interval layer).
    InvalidInterval {
        lower: f64,
        upper: f64,
    },

    // ---- Weights ----
    /// Weight vector length does not equal the equation count.
    WeightLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Weight components must be finite and strictly positive.
    InvalidWeight {
        index: usize,
        value: f64,
    },

    // ---- Configuration ----
    /// Functional-change tolerance must be positive and finite.
    InvalidTolF {
        tol: f64,
        reason: &'static str,
    },

    /// Argument-variation tolerance must be positive and finite.
    InvalidTolX {
        tol: f64,
        reason: &'static str,
    },

    /// Supergradient-norm tolerance must be positive and finite.
    InvalidTolG {
        tol: f64,
        reason: &'static str,
    },

    /// Iteration limit must be positive.
    InvalidMaxItn {
        max_itn: usize,
        reason: &'static str,
    },

    /// Convergence-history length must be positive.
    InvalidHistoryLength {
        nsims: usize,
        reason: &'static str,
    },

    /// Space-dilation coefficient must exceed one.
    InvalidDilationCoeff {
        alpha: f64,
        reason: &'static str,
    },

    /// Initial line-search step must be positive and finite.
    InvalidInitialStep {
        h0: f64,
        reason: &'static str,
    },

    /// Step-growth cadence must be positive.
    InvalidStepCadence {
        nh: usize,
        reason: &'static str,
    },

    /// Step shrink/grow factor out of range.
    InvalidStepFactor {
        factor: f64,
        reason: &'static str,
    },

    // ---- Correction drivers ----
    /// Correction factor must be finite and greater than one.
    InvalidCorrectionFactor {
        factor: f64,
        reason: &'static str,
    },

    /// Correction loop exhausted its round limit without reaching a
    /// non-empty tolerable solution set.
    CorrectionLimit {
        rounds: usize,
        tolmax: f64,
    },
}

impl std::error::Error for TolError {}

impl std::fmt::Display for TolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Dimension mismatch ----
            TolError::MatrixRowMismatch { inf_rows, sup_rows } => {
                write!(
                    f,
                    "Row counts of the bound matrices differ: lower has {inf_rows}, upper has {sup_rows}"
                )
            }
            TolError::MatrixColumnMismatch { inf_cols, sup_cols } => {
                write!(
                    f,
                    "Column counts of the bound matrices differ: lower has {inf_cols}, upper has {sup_cols}"
                )
            }
            TolError::RhsLengthMismatch { inf_len, sup_len } => {
                write!(
                    f,
                    "Right-hand-side bound vectors differ in length: lower has {inf_len}, upper has {sup_len}"
                )
            }
            TolError::SystemShapeMismatch { rows, rhs_len } => {
                write!(
                    f,
                    "Matrix has {rows} rows but the right-hand side has {rhs_len} components"
                )
            }

            // ---- Invalid intervals ----
            TolError::InvalidMatrixInterval { row, col, inf, sup } => {
                write!(
                    f,
                    "Invalid interval element at ({row}, {col}): lower {inf} exceeds upper {sup}"
                )
            }
            TolError::InvalidRhsInterval { index, inf, sup } => {
                write!(
                    f,
                    "Invalid right-hand-side interval at index {index}: lower {inf} exceeds upper {sup}"
                )
            }
            TolError::NonFiniteMatrixEntry { row, col, value } => {
                write!(f, "Matrix entry at ({row}, {col}) must be finite, got {value}")
            }
            TolError::NonFiniteRhsEntry { index, value } => {
                write!(f, "Right-hand-side entry at index {index} must be finite, got {value}")
            }
            TolError::InvalidInterval { lower, upper } => {
                write!(f, "Invalid interval: lower {lower} exceeds upper {upper}")
            }

            // ---- Weights ----
            TolError::WeightLengthMismatch { expected, actual } => {
                write!(f, "Weight length mismatch: expected {expected}, actual {actual}")
            }
            TolError::InvalidWeight { index, value } => {
                write!(
                    f,
                    "Invalid weight at index {index}: {value}, must be finite and strictly positive"
                )
            }

            // ---- Configuration ----
            TolError::InvalidTolF { tol, reason } => {
                write!(f, "Invalid functional tolerance {tol}: {reason}")
            }
            TolError::InvalidTolX { tol, reason } => {
                write!(f, "Invalid argument tolerance {tol}: {reason}")
            }
            TolError::InvalidTolG { tol, reason } => {
                write!(f, "Invalid supergradient tolerance {tol}: {reason}")
            }
            TolError::InvalidMaxItn { max_itn, reason } => {
                write!(f, "Invalid iteration limit {max_itn}: {reason}")
            }
            TolError::InvalidHistoryLength { nsims, reason } => {
                write!(f, "Invalid convergence-history length {nsims}: {reason}")
            }
            TolError::InvalidDilationCoeff { alpha, reason } => {
                write!(f, "Invalid dilation coefficient {alpha}: {reason}")
            }
            TolError::InvalidInitialStep { h0, reason } => {
                write!(f, "Invalid initial step {h0}: {reason}")
            }
            TolError::InvalidStepCadence { nh, reason } => {
                write!(f, "Invalid step cadence {nh}: {reason}")
            }
            TolError::InvalidStepFactor { factor, reason } => {
                write!(f, "Invalid step factor {factor}: {reason}")
            }

            // ---- Correction drivers ----
            TolError::InvalidCorrectionFactor { factor, reason } => {
                write!(f, "Invalid correction factor {factor}: {reason}")
            }
            TolError::CorrectionLimit { rounds, tolmax } => {
                write!(
                    f,
                    "Correction stopped after {rounds} rounds with the functional maximum still negative ({tolmax})"
                )
            }
        }
    }
}

impl From<IntervalError> for TolError {
    fn from(err: IntervalError) -> Self {
        match err {
            IntervalError::InvalidBounds { lower, upper } => {
                TolError::InvalidInterval { lower, upper }
            }
            IntervalError::NonFiniteBound { value } => {
                TolError::InvalidInterval { lower: value, upper: value }
            }
            IntervalError::DivisorContainsZero { lower, upper } => {
                TolError::InvalidInterval { lower, upper }
            }
            IntervalError::DivisorIsZero => TolError::InvalidInterval { lower: 0.0, upper: 0.0 },
            IntervalError::MatrixShapeMismatch { inf, sup } => {
                if inf.0 != sup.0 {
                    TolError::MatrixRowMismatch { inf_rows: inf.0, sup_rows: sup.0 }
                } else {
                    TolError::MatrixColumnMismatch { inf_cols: inf.1, sup_cols: sup.1 }
                }
            }
            IntervalError::RaggedMatrixRows { expected, actual, .. } => {
                TolError::MatrixColumnMismatch { inf_cols: expected, sup_cols: actual }
            }
            IntervalError::InvalidMatrixElement { row, col, lower, upper } => {
                TolError::InvalidMatrixInterval { row, col, inf: lower, sup: upper }
            }
            IntervalError::NonFiniteMatrixElement { row, col, value } => {
                TolError::NonFiniteMatrixEntry { row, col, value }
            }
            IntervalError::VectorLengthMismatch { inf, sup } => {
                TolError::RhsLengthMismatch { inf_len: inf, sup_len: sup }
            }
            IntervalError::InvalidVectorComponent { index, lower, upper } => {
                TolError::InvalidRhsInterval { index, inf: lower, sup: upper }
            }
            IntervalError::NonFiniteVectorComponent { index, value } => {
                TolError::NonFiniteRhsEntry { index, value }
            }
        }
    }
}
