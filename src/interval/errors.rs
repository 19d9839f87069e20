/// Crate-wide result alias for interval construction and arithmetic.
pub type IntervalResult<T> = Result<T, IntervalError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntervalError {
    // ---- Scalar construction ----
    /// Lower bound exceeds the upper bound.
    InvalidBounds {
        lower: f64,
        upper: f64,
    },

    /// A bound is NaN or infinite.
    NonFiniteBound {
        value: f64,
    },

    // ---- Scalar arithmetic ----
    /// Division by an interval containing zero.
    DivisorContainsZero {
        lower: f64,
        upper: f64,
    },

    /// Division by a zero point operand.
    DivisorIsZero,

    // ---- Matrix construction ----
    /// Lower- and upper-bound matrices have different shapes.
    MatrixShapeMismatch {
        inf: (usize, usize),
        sup: (usize, usize),
    },

    /// A nested-row construction received rows of uneven length.
    RaggedMatrixRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A matrix entry has its lower bound above its upper bound.
    InvalidMatrixElement {
        row: usize,
        col: usize,
        lower: f64,
        upper: f64,
    },

    /// A matrix entry bound is NaN or infinite.
    NonFiniteMatrixElement {
        row: usize,
        col: usize,
        value: f64,
    },

    // ---- Vector construction ----
    /// Lower- and upper-bound vectors have different lengths.
    VectorLengthMismatch {
        inf: usize,
        sup: usize,
    },

    /// A vector component has its lower bound above its upper bound.
    InvalidVectorComponent {
        index: usize,
        lower: f64,
        upper: f64,
    },

    /// A vector component bound is NaN or infinite.
    NonFiniteVectorComponent {
        index: usize,
        value: f64,
    },
}

impl std::error::Error for IntervalError {}

impl std::fmt::Display for IntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Scalar construction ----
            IntervalError::InvalidBounds { lower, upper } => {
                write!(f, "Invalid interval bounds: lower {lower} exceeds upper {upper}")
            }
            IntervalError::NonFiniteBound { value } => {
                write!(f, "Interval bound must be finite, got {value}")
            }

            // ---- Scalar arithmetic ----
            IntervalError::DivisorContainsZero { lower, upper } => {
                write!(f, "Cannot divide by interval [{lower}, {upper}]: it contains zero")
            }
            IntervalError::DivisorIsZero => {
                write!(f, "Cannot divide interval by zero")
            }

            // ---- Matrix construction ----
            IntervalError::MatrixShapeMismatch { inf, sup } => {
                write!(
                    f,
                    "Bound matrix shapes differ: lower is {}x{}, upper is {}x{}",
                    inf.0, inf.1, sup.0, sup.1
                )
            }
            IntervalError::RaggedMatrixRows { row, expected, actual } => {
                write!(
                    f,
                    "Matrix row {row} has {actual} elements, expected {expected} as in the first row"
                )
            }
            IntervalError::InvalidMatrixElement { row, col, lower, upper } => {
                write!(
                    f,
                    "Invalid interval element at ({row}, {col}): lower {lower} exceeds upper {upper}"
                )
            }
            IntervalError::NonFiniteMatrixElement { row, col, value } => {
                write!(f, "Matrix element bound at ({row}, {col}) must be finite, got {value}")
            }

            // ---- Vector construction ----
            IntervalError::VectorLengthMismatch { inf, sup } => {
                write!(f, "Bound vector lengths differ: lower has {inf}, upper has {sup}")
            }
            IntervalError::InvalidVectorComponent { index, lower, upper } => {
                write!(
                    f,
                    "Invalid interval component at index {index}: lower {lower} exceeds upper {upper}"
                )
            }
            IntervalError::NonFiniteVectorComponent { index, value } => {
                write!(f, "Vector component bound at index {index} must be finite, got {value}")
            }
        }
    }
}
