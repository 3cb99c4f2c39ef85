//! Rational functions: polynomial long division into quotient + remainder.

use crate::polynomial::Polynomial;
use crate::traits::{Evaluate, FloatScalar};

/// The result of dividing one polynomial by another.
///
/// Holds the divisor together with the quotient and proper remainder of the
/// division, so the numerator satisfies `quotient·divisor + remainder`
/// with `degree(remainder) < degree(divisor)` (for a degree-0 divisor the
/// division is exact and the remainder is the zero polynomial). Immutable
/// after construction.
///
/// # Example
///
/// ```
/// use radicis::Polynomial;
///
/// // (x² - 5x + 6) / (x - 2) = x - 3
/// let n = Polynomial::from_coefficients(&[1.0, -5.0, 6.0]);
/// let d = Polynomial::from_coefficients(&[1.0, -2.0]);
/// let r = &n / &d;
/// assert_eq!(r.quotient().coefficients(), [-3.0, 1.0]);
/// assert_eq!(r.remainder().degree(), 0);
/// assert_eq!(r.remainder().coefficient(0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rational<T> {
    divisor: Polynomial<T>,
    quotient: Polynomial<T>,
    remainder: Polynomial<T>,
}

impl<T: FloatScalar> Rational<T> {
    /// Divide `numerator` by `divisor`.
    ///
    /// Repeatedly cancels the remainder's leading term against the
    /// divisor's until the remainder's degree drops below the divisor's.
    /// A degree-0 divisor consumes every term down to and including the
    /// constant, then stops: the division is exact.
    ///
    /// The divisor must have at least one term (`degree(divisor) ≥ 0`).
    pub fn new(numerator: &Polynomial<T>, divisor: &Polynomial<T>) -> Self {
        let mut remainder = numerator.clone();
        let mut quotient = Polynomial::new();

        while divisor.degree() <= remainder.degree() {
            let degr = remainder.degree();
            let degd = divisor.degree();
            let deg = degr - degd;

            let valr = remainder.coefficient(degr);
            let vald = divisor.coefficient(degd);
            let val = valr / vald;

            remainder = &remainder + &divisor.mul_term(deg, -val);
            quotient = quotient.add_term(deg, val);

            // The degree-0 pass is final; the pinned constant term would
            // otherwise keep the loop at degree 0 forever.
            if degr == 0 {
                break;
            }
        }

        Self {
            divisor: divisor.clone(),
            quotient,
            remainder,
        }
    }

    /// The quotient polynomial.
    pub fn quotient(&self) -> &Polynomial<T> {
        &self.quotient
    }

    /// The proper remainder polynomial.
    pub fn remainder(&self) -> &Polynomial<T> {
        &self.remainder
    }

    /// The divisor polynomial.
    pub fn divisor(&self) -> &Polynomial<T> {
        &self.divisor
    }

    /// Evaluate as `quotient(x) + remainder(x) / divisor(x)`.
    ///
    /// A zero divisor value is not special-cased: evaluation at a root of
    /// the divisor yields the IEEE-754 infinity or NaN of the underlying
    /// float division.
    pub fn evaluate(&self, x: T) -> T {
        self.quotient.evaluate(x) + self.remainder.evaluate(x) / self.divisor.evaluate(x)
    }
}

impl<T: FloatScalar> Evaluate<T> for Rational<T> {
    fn evaluate(&self, x: T) -> T {
        Rational::evaluate(self, x)
    }
}

#[cfg(test)]
mod tests {
    use crate::polynomial::Polynomial;

    fn poly(coefs: &[f64]) -> Polynomial<f64> {
        Polynomial::from_coefficients(coefs)
    }

    #[test]
    fn exact_division() {
        // (x² - 5x + 6) / (x - 3) = x - 2
        let r = &poly(&[1.0, -5.0, 6.0]) / &poly(&[1.0, -3.0]);
        assert_eq!(r.quotient(), &poly(&[1.0, -2.0]));
        assert_eq!(r.remainder(), &Polynomial::new());
    }

    #[test]
    fn proper_remainder() {
        // (x³ + 2) / (x² + 1): quotient x, remainder -x + 2
        let r = &poly(&[1.0, 0.0, 0.0, 2.0]) / &poly(&[1.0, 0.0, 1.0]);
        assert_eq!(r.quotient(), &poly(&[1.0, 0.0]));
        assert_eq!(r.remainder(), &poly(&[-1.0, 2.0]));
        assert!(r.remainder().degree() < r.divisor().degree());
    }

    #[test]
    fn divide_by_self() {
        let p = poly(&[3.0, -1.0, 4.0]);
        let r = &p / &p;
        assert_eq!(r.quotient(), &poly(&[1.0]));
        assert_eq!(r.remainder(), &Polynomial::new());
    }

    #[test]
    fn degree_zero_divisor_is_exact() {
        // (x² + 1) / 2 = 0.5x² + 0.5
        let r = &poly(&[1.0, 0.0, 1.0]) / &poly(&[2.0]);
        assert_eq!(r.quotient(), &poly(&[0.5, 0.0, 0.5]));
        assert_eq!(r.remainder(), &Polynomial::new());
    }

    #[test]
    fn numerator_below_divisor() {
        // (x + 1) / (x² + 1): quotient 0, remainder untouched
        let n = poly(&[1.0, 1.0]);
        let r = &n / &poly(&[1.0, 0.0, 1.0]);
        assert_eq!(r.quotient(), &Polynomial::new());
        assert_eq!(r.remainder(), &n);
    }

    #[test]
    fn evaluate_combines_parts() {
        // (x³ + 2) / (x² + 1): q(2) + r(2)/d(2) = 2 + (-2 + 2)/5 = 2
        let r = &poly(&[1.0, 0.0, 0.0, 2.0]) / &poly(&[1.0, 0.0, 1.0]);
        assert_eq!(r.evaluate(2.0), 2.0);
    }

    #[test]
    fn evaluate_at_divisor_root_is_nan() {
        // (x² - 1) / (x - 1) divides exactly; at x = 1 the remainder term
        // is 0/0, which is deliberately left to float semantics.
        let r = &poly(&[1.0, 0.0, -1.0]) / &poly(&[1.0, -1.0]);
        assert_eq!(r.quotient(), &poly(&[1.0, 1.0]));
        assert!(r.evaluate(1.0).is_nan());
    }

    #[test]
    fn multiply_then_divide_round_trips() {
        let p = poly(&[1.0, 2.0, 3.0]);
        let q = poly(&[1.0, 4.0]);
        let r = &(&p * &q) / &q;
        assert_eq!(r.quotient(), &p);
        assert_eq!(r.remainder(), &Polynomial::new());
    }
}
