use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::rational::Rational;
use crate::traits::FloatScalar;

use super::Polynomial;

// ── Addition ────────────────────────────────────────────────────────

impl<T: FloatScalar> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let mut result = self.clone();
        for (&deg, &val) in &rhs.terms {
            result.term_add(deg, val);
        }
        result
    }
}

impl<T: FloatScalar> Add for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self + &rhs
    }
}

impl<T: FloatScalar> Add<&Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        &self + rhs
    }
}

impl<T: FloatScalar> Add<Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self + &rhs
    }
}

// ── Subtraction ─────────────────────────────────────────────────────

impl<T: FloatScalar> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let mut result = self.clone();
        for (&deg, &val) in &rhs.terms {
            result.term_add(deg, -val);
        }
        result
    }
}

impl<T: FloatScalar> Sub for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self - &rhs
    }
}

impl<T: FloatScalar> Sub<&Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        &self - rhs
    }
}

impl<T: FloatScalar> Sub<Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self - &rhs
    }
}

// ── Multiplication (convolution) ────────────────────────────────────

impl<T: FloatScalar> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        let mut result = Polynomial::new();
        for (&d1, &c1) in &rhs.terms {
            for (&d2, &c2) in &self.terms {
                result.term_add(d1 + d2, c1 * c2);
            }
        }
        result
    }
}

impl<T: FloatScalar> Mul for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

impl<T: FloatScalar> Mul<&Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        &self * rhs
    }
}

impl<T: FloatScalar> Mul<Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self * &rhs
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: FloatScalar> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        self * -T::one()
    }
}

impl<T: FloatScalar> Neg for Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

// ── Scalar addition / subtraction (constant term only) ──────────────

impl<T: FloatScalar> Add<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: T) -> Polynomial<T> {
        let mut result = self.clone();
        let sum = result.coefficient(0) + rhs;
        result.term_set(0, sum);
        result
    }
}

impl<T: FloatScalar> Add<T> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: T) -> Polynomial<T> {
        &self + rhs
    }
}

impl<T: FloatScalar> Sub<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: T) -> Polynomial<T> {
        let mut result = self.clone();
        let diff = result.coefficient(0) - rhs;
        result.term_set(0, diff);
        result
    }
}

impl<T: FloatScalar> Sub<T> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: T) -> Polynomial<T> {
        &self - rhs
    }
}

// ── Scalar multiplication / division (every term) ───────────────────

impl<T: FloatScalar> Mul<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: T) -> Polynomial<T> {
        let mut result = self.clone();
        for (&deg, &val) in &self.terms {
            result.term_set(deg, val * rhs);
        }
        result
    }
}

impl<T: FloatScalar> Mul<T> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: T) -> Polynomial<T> {
        &self * rhs
    }
}

impl<T: FloatScalar> Div<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn div(self, rhs: T) -> Polynomial<T> {
        let mut result = self.clone();
        for (&deg, &val) in &self.terms {
            result.term_set(deg, val / rhs);
        }
        result
    }
}

impl<T: FloatScalar> Div<T> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn div(self, rhs: T) -> Polynomial<T> {
        &self / rhs
    }
}

// ── Polynomial division → rational ──────────────────────────────────

impl<T: FloatScalar> Div for &Polynomial<T> {
    type Output = Rational<T>;

    /// Long division into quotient + proper-remainder form.
    fn div(self, rhs: &Polynomial<T>) -> Rational<T> {
        Rational::new(self, rhs)
    }
}

impl<T: FloatScalar> Div for Polynomial<T> {
    type Output = Rational<T>;
    fn div(self, rhs: Polynomial<T>) -> Rational<T> {
        &self / &rhs
    }
}
