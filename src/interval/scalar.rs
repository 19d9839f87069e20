//! Closed real interval with the arithmetic and set operations used by the
//! tolerance machinery.
//!
//! Convention: intervals are immutable values; every operation is an
//! explicit named method returning a new [`Interval`] (no operator
//! overloading). An empty intersection is represented by `None`, never by
//! a sentinel interval — `[0, 0]` is an ordinary degenerate point interval
//! and stays distinguishable from the empty set.
use crate::interval::errors::{IntervalError, IntervalResult};

/// Closed real interval `[lower, upper]`.
///
/// Invariants (enforced by [`Interval::new`]):
/// - `lower ≤ upper`,
/// - both bounds are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Construct a validated interval.
    ///
    /// # Errors
    /// - [`IntervalError::NonFiniteBound`] if either bound is NaN or infinite.
    /// - [`IntervalError::InvalidBounds`] if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> IntervalResult<Self> {
        if !lower.is_finite() {
            return Err(IntervalError::NonFiniteBound { value: lower });
        }
        if !upper.is_finite() {
            return Err(IntervalError::NonFiniteBound { value: upper });
        }
        if lower > upper {
            return Err(IntervalError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Degenerate point interval `[value, value]`.
    ///
    /// # Errors
    /// - [`IntervalError::NonFiniteBound`] if `value` is NaN or infinite.
    pub fn point(value: f64) -> IntervalResult<Self> {
        Self::new(value, value)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Midpoint `(lower + upper) / 2`.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Radius `(upper − lower) / 2`; non-negative by construction.
    pub fn radius(&self) -> f64 {
        0.5 * (self.upper - self.lower)
    }

    /// Width `upper − lower`; non-negative by construction.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Bound-wise sum `[a₁ + a₂, b₁ + b₂]`.
    pub fn add(&self, other: &Interval) -> Interval {
        Interval { lower: self.lower + other.lower, upper: self.upper + other.upper }
    }

    /// Bound-wise difference `[a₁ − b₂, b₁ − a₂]`.
    pub fn sub(&self, other: &Interval) -> Interval {
        Interval { lower: self.lower - other.upper, upper: self.upper - other.lower }
    }

    /// Standard interval extension of multiplication: min/max over the four
    /// corner products.
    pub fn mul(&self, other: &Interval) -> Interval {
        let corners = [
            self.lower * other.lower,
            self.lower * other.upper,
            self.upper * other.lower,
            self.upper * other.upper,
        ];
        Interval { lower: min_of(&corners), upper: max_of(&corners) }
    }

    /// Standard interval extension of division: min/max over the four corner
    /// quotients.
    ///
    /// # Errors
    /// Returns [`IntervalError::DivisorContainsZero`] when `other` contains
    /// zero; the extension is undefined there and no call site on the solve
    /// path ever divides by an interval.
    pub fn div(&self, other: &Interval) -> IntervalResult<Interval> {
        if other.contains(0.0) {
            return Err(IntervalError::DivisorContainsZero {
                lower: other.lower,
                upper: other.upper,
            });
        }
        let corners = [
            self.lower / other.lower,
            self.lower / other.upper,
            self.upper / other.lower,
            self.upper / other.upper,
        ];
        Ok(Interval { lower: min_of(&corners), upper: max_of(&corners) })
    }

    /// Translate both bounds by a point value.
    pub fn add_scalar(&self, value: f64) -> Interval {
        Interval { lower: self.lower + value, upper: self.upper + value }
    }

    /// Translate both bounds by the negation of a point value.
    pub fn sub_scalar(&self, value: f64) -> Interval {
        Interval { lower: self.lower - value, upper: self.upper - value }
    }

    /// Scale by a point value; a negative factor swaps the bounds.
    pub fn mul_scalar(&self, value: f64) -> Interval {
        let (a, b) = (self.lower * value, self.upper * value);
        if a <= b { Interval { lower: a, upper: b } } else { Interval { lower: b, upper: a } }
    }

    /// Divide by a nonzero point value; a negative divisor swaps the bounds.
    ///
    /// # Errors
    /// Returns [`IntervalError::DivisorIsZero`] when `value == 0`.
    pub fn div_scalar(&self, value: f64) -> IntervalResult<Interval> {
        if value == 0.0 {
            return Err(IntervalError::DivisorIsZero);
        }
        Ok(self.mul_scalar(1.0 / value))
    }

    /// Membership test `lower ≤ value ≤ upper`.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Intersection `[max(a₁, a₂), min(b₁, b₂)]`.
    ///
    /// Returns `None` when the intervals are disjoint. The result for two
    /// touching intervals is the shared point; `[0,0] ∩ [0,0]` is
    /// `Some([0,0])`, not empty.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let lower = self.lower.max(other.lower);
        let upper = self.upper.min(other.upper);
        if lower > upper { None } else { Some(Interval { lower, upper }) }
    }

    /// Interval hull `[min(a₁, a₂), max(b₁, b₂)]`; always well-formed.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval { lower: self.lower.min(other.lower), upper: self.upper.max(other.upper) }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

fn min_of(values: &[f64; 4]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(values: &[f64; 4]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
