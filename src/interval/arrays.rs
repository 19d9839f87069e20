//! Rectangular interval collections backed by `ndarray` bound arrays.
//!
//! An m×n [`IntervalMatrix`] and an m-component [`IntervalVector`] store
//! their lower and upper bounds as separate dense `f64` arrays rather than
//! as arrays of [`Interval`] values: the solver consumes whole bound
//! matrices at once (center/radius decomposition, supergradient row
//! selection), and the split layout keeps those reads contiguous. Element
//! accessors materialize [`Interval`] values on demand.
//!
//! Both types validate on construction — every entry finite, every lower
//! bound at most its upper bound — and are immutable afterwards.
use ndarray::{Array1, Array2};

use crate::interval::{
    errors::{IntervalError, IntervalResult},
    scalar::Interval,
};

/// Interval matrix `[inf, sup]` with validated, immutable bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalMatrix {
    inf: Array2<f64>,
    sup: Array2<f64>,
}

impl IntervalMatrix {
    /// Build from lower- and upper-bound matrices.
    ///
    /// # Errors
    /// - [`IntervalError::MatrixShapeMismatch`] if the shapes differ.
    /// - [`IntervalError::NonFiniteMatrixElement`] for a NaN or infinite
    ///   entry (reported at the first offending position).
    /// - [`IntervalError::InvalidMatrixElement`] if a lower bound exceeds
    ///   its paired upper bound.
    pub fn from_bounds(inf: Array2<f64>, sup: Array2<f64>) -> IntervalResult<Self> {
        if inf.dim() != sup.dim() {
            return Err(IntervalError::MatrixShapeMismatch { inf: inf.dim(), sup: sup.dim() });
        }
        for ((row, col), &lo) in inf.indexed_iter() {
            let hi = sup[[row, col]];
            if !lo.is_finite() {
                return Err(IntervalError::NonFiniteMatrixElement { row, col, value: lo });
            }
            if !hi.is_finite() {
                return Err(IntervalError::NonFiniteMatrixElement { row, col, value: hi });
            }
            if lo > hi {
                return Err(IntervalError::InvalidMatrixElement { row, col, lower: lo, upper: hi });
            }
        }
        Ok(Self { inf, sup })
    }

    /// Build from a rectangular nested collection of intervals.
    ///
    /// Element validity is guaranteed by [`Interval`]; only rectangularity
    /// is checked here.
    ///
    /// # Errors
    /// - [`IntervalError::RaggedMatrixRows`] if the rows have uneven
    ///   lengths.
    pub fn from_elements(rows: &[Vec<Interval>]) -> IntervalResult<Self> {
        let m = rows.len();
        let n = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(IntervalError::RaggedMatrixRows {
                    row: i,
                    expected: n,
                    actual: row.len(),
                });
            }
        }
        let mut inf = Array2::zeros((m, n));
        let mut sup = Array2::zeros((m, n));
        for (i, row) in rows.iter().enumerate() {
            for (j, iv) in row.iter().enumerate() {
                inf[[i, j]] = iv.lower();
                sup[[i, j]] = iv.upper();
            }
        }
        Ok(Self { inf, sup })
    }

    /// Number of rows (equations).
    pub fn nrows(&self) -> usize {
        self.inf.nrows()
    }

    /// Number of columns (unknowns).
    pub fn ncols(&self) -> usize {
        self.inf.ncols()
    }

    /// Lower-bound matrix.
    pub fn inf(&self) -> &Array2<f64> {
        &self.inf
    }

    /// Upper-bound matrix.
    pub fn sup(&self) -> &Array2<f64> {
        &self.sup
    }

    /// Interval at `(row, col)`.
    ///
    /// # Panics
    /// Panics on an out-of-bounds index, as the underlying arrays do.
    pub fn get(&self, row: usize, col: usize) -> Interval {
        Interval::new(self.inf[[row, col]], self.sup[[row, col]])
            .expect("bounds validated on construction")
    }
}

/// Interval vector `[inf, sup]` with validated, immutable bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalVector {
    inf: Array1<f64>,
    sup: Array1<f64>,
}

impl IntervalVector {
    /// Build from lower- and upper-bound vectors.
    ///
    /// # Errors
    /// - [`IntervalError::VectorLengthMismatch`] if the lengths differ.
    /// - [`IntervalError::NonFiniteVectorComponent`] for a NaN or infinite
    ///   entry.
    /// - [`IntervalError::InvalidVectorComponent`] if a lower bound exceeds
    ///   its paired upper bound.
    pub fn from_bounds(inf: Array1<f64>, sup: Array1<f64>) -> IntervalResult<Self> {
        if inf.len() != sup.len() {
            return Err(IntervalError::VectorLengthMismatch { inf: inf.len(), sup: sup.len() });
        }
        for (index, (&lo, &hi)) in inf.iter().zip(sup.iter()).enumerate() {
            if !lo.is_finite() {
                return Err(IntervalError::NonFiniteVectorComponent { index, value: lo });
            }
            if !hi.is_finite() {
                return Err(IntervalError::NonFiniteVectorComponent { index, value: hi });
            }
            if lo > hi {
                return Err(IntervalError::InvalidVectorComponent { index, lower: lo, upper: hi });
            }
        }
        Ok(Self { inf, sup })
    }

    /// Build from a slice of intervals.
    pub fn from_elements(elements: &[Interval]) -> Self {
        let inf = Array1::from_iter(elements.iter().map(Interval::lower));
        let sup = Array1::from_iter(elements.iter().map(Interval::upper));
        Self { inf, sup }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.inf.len()
    }

    /// True when the vector has no components.
    pub fn is_empty(&self) -> bool {
        self.inf.is_empty()
    }

    /// Lower-bound vector.
    pub fn inf(&self) -> &Array1<f64> {
        &self.inf
    }

    /// Upper-bound vector.
    pub fn sup(&self) -> &Array1<f64> {
        &self.sup
    }

    /// Interval at `index`.
    ///
    /// # Panics
    /// Panics on an out-of-bounds index, as the underlying arrays do.
    pub fn get(&self, index: usize) -> Interval {
        Interval::new(self.inf[index], self.sup[index]).expect("bounds validated on construction")
    }
}
