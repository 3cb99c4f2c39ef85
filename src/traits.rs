use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as polynomial coefficients.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point coefficients.
///
/// Required by operations that need `sqrt`, `powi`, `abs`, etc.
/// (evaluation, long division, root finding). Covers `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// A univariate scalar function: anything that can be evaluated at a point.
///
/// This is the seam through which polynomials and rationals compose into
/// larger expressions. One explicit argument — a node that needs more
/// inputs is a different trait, not a longer argument list.
///
/// # Example
///
/// ```
/// use radicis::{Evaluate, Polynomial};
///
/// fn midpoint_value<F: Evaluate<f64>>(f: &F, a: f64, b: f64) -> f64 {
///     f.evaluate((a + b) / 2.0)
/// }
///
/// let p = Polynomial::from_coefficients(&[1.0, 0.0]); // x
/// assert_eq!(midpoint_value(&p, 0.0, 4.0), 2.0);
/// ```
pub trait Evaluate<T> {
    /// Evaluate the function at `x`.
    fn evaluate(&self, x: T) -> T;
}
