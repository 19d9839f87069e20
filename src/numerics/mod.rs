//! numerics — linear-algebra helpers behind the solver.
//!
//! Hosts the decomposition-based work the ascent loop relies on but does
//! not want inline: condition-number screening of the center matrix, the
//! SVD least-squares starting point, and the Euclidean norm. The
//! `ndarray` ↔ `nalgebra` boundary is crossed only here.

pub mod least_squares;

pub use self::least_squares::{l2_norm, singular_extrema, starting_point, MAX_CONDITION};
