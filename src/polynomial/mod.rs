//! Sparse univariate polynomials with real coefficients.
//!
//! A [`Polynomial`] maps each degree to its coefficient; zero coefficients
//! at non-zero degrees are never stored, so arithmetic stays proportional
//! to the number of actual terms. Construction is from a dense
//! highest-degree-first coefficient list ([`Polynomial::from_coefficients`])
//! or from text ([`Polynomial::parse`]). All arithmetic returns new values;
//! an existing polynomial is never mutated through the public surface.
//!
//! Operators live in `ops.rs`: `+`, `-`, `*` between polynomials, scalar
//! `+`/`-` on the constant term, scalar `*`/`/` on every term, and
//! `&p / &q` producing a [`Rational`](crate::rational::Rational).

mod ops;
mod parse;


pub use parse::ParseError;

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::traits::{Evaluate, FloatScalar};

/// A univariate polynomial `a·x^n + b·x^(n-1) + ... + d·x + e`.
///
/// Terms are kept in a degree-keyed map. The constant term is pinned: once
/// a polynomial has been built through any public constructor it always
/// carries a degree-0 entry, even when that entry is zero. The zero
/// polynomial therefore has degree `0`, and `degree() > 0` is a valid
/// "still reducible" test for iterative callers. Only
/// [`Polynomial::default`] and an empty coefficient slice produce a
/// polynomial with no terms at all, which reports degree `-1`.
///
/// # Example
///
/// ```
/// use radicis::Polynomial;
///
/// let p = Polynomial::from_coefficients(&[2.0, 0.0, -1.0]); // 2x² - 1
/// assert_eq!(p.degree(), 2);
/// assert_eq!(p.coefficient(2), 2.0);
/// assert_eq!(p.coefficient(1), 0.0); // absent term
/// assert_eq!(p.evaluate(3.0), 17.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    terms: BTreeMap<i32, T>,
}

impl<T> Default for Polynomial<T> {
    /// A polynomial with no terms at all (degree `-1`).
    fn default() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }
}

// ── Construction ────────────────────────────────────────────────────

impl<T: FloatScalar> Polynomial<T> {
    /// The zero polynomial: a single degree-0 term with value zero.
    ///
    /// ```
    /// use radicis::Polynomial;
    ///
    /// let z = Polynomial::<f64>::new();
    /// assert_eq!(z.degree(), 0);
    /// assert_eq!(z.coefficient(0), 0.0);
    /// ```
    pub fn new() -> Self {
        let mut p = Self::default();
        p.term_set(0, T::zero());
        p
    }

    /// Build from coefficients ordered highest degree first.
    ///
    /// Zero coefficients at non-zero degrees are dropped; an empty slice
    /// yields the no-terms polynomial of degree `-1`.
    ///
    /// ```
    /// use radicis::Polynomial;
    ///
    /// // x³ - 6x² + 11x - 6
    /// let p = Polynomial::from_coefficients(&[1.0, -6.0, 11.0, -6.0]);
    /// assert_eq!(p.degree(), 3);
    /// assert_eq!(p.coefficient(1), 11.0);
    /// ```
    pub fn from_coefficients(vals: &[T]) -> Self {
        let mut p = Self::default();
        let n = vals.len() as i32;
        for (i, &val) in vals.iter().enumerate() {
            p.term_set(n - 1 - i as i32, val);
        }
        p
    }
}

// ── Queries ─────────────────────────────────────────────────────────

impl<T: FloatScalar> Polynomial<T> {
    /// The highest stored degree, or `-1` when no terms are stored.
    pub fn degree(&self) -> i32 {
        match self.terms.keys().next_back() {
            Some(&deg) => deg,
            None => -1,
        }
    }

    /// The coefficient at `deg`, zero when the term is absent.
    pub fn coefficient(&self, deg: i32) -> T {
        match self.terms.get(&deg) {
            Some(&val) => val,
            None => T::zero(),
        }
    }

    /// Dense coefficient vector indexed by degree (`len == degree() + 1`).
    ///
    /// Empty for the no-terms polynomial.
    pub fn coefficients(&self) -> Vec<T> {
        let deg = self.degree();
        if deg < 0 {
            return Vec::new();
        }
        let mut coef = vec![T::zero(); deg as usize + 1];
        for (&d, &val) in &self.terms {
            coef[d as usize] = val;
        }
        coef
    }
}

// ── Term arithmetic ─────────────────────────────────────────────────

impl<T: FloatScalar> Polynomial<T> {
    /// Multiply by the monomial `val·x^deg`.
    ///
    /// ```
    /// use radicis::Polynomial;
    ///
    /// let p = Polynomial::from_coefficients(&[1.0, 1.0]); // x + 1
    /// let q = p.mul_term(2, 3.0); // 3x³ + 3x²
    /// assert_eq!(q.coefficient(3), 3.0);
    /// assert_eq!(q.coefficient(2), 3.0);
    /// ```
    pub fn mul_term(&self, deg: i32, val: T) -> Self {
        let mut result = Self::new();
        for (&d, &c) in &self.terms {
            result.term_set(deg + d, val * c);
        }
        result
    }

    /// Add the monomial `val·x^deg`.
    pub fn add_term(&self, deg: i32, val: T) -> Self {
        let mut result = self.clone();
        result.term_add(deg, val);
        result
    }

    /// Store `val` at `deg`, keeping the map normalized: zeros are removed
    /// except at degree 0, which stays present as an explicit zero.
    fn term_set(&mut self, deg: i32, val: T) {
        if val != T::zero() {
            self.terms.insert(deg, val);
        } else if deg != 0 {
            self.terms.remove(&deg);
        } else {
            self.terms.insert(0, T::zero());
        }
    }

    /// Accumulate `val` onto the coefficient at `deg`.
    fn term_add(&mut self, deg: i32, val: T) {
        let sum = self.coefficient(deg) + val;
        self.term_set(deg, sum);
    }
}

// ── Evaluation ──────────────────────────────────────────────────────

impl<T: FloatScalar> Polynomial<T> {
    /// Evaluate at `x` by Horner's scheme over the stored terms.
    ///
    /// The running result is raised by the gap between consecutive stored
    /// degrees, so sparse polynomials evaluate without materializing their
    /// missing coefficients.
    ///
    /// ```
    /// use radicis::Polynomial;
    ///
    /// let p = Polynomial::from_coefficients(&[1.0, 0.0, 0.0, 0.0, -1.0]); // x⁴ - 1
    /// assert_eq!(p.evaluate(2.0), 15.0);
    /// ```
    pub fn evaluate(&self, x: T) -> T {
        let mut result = T::zero();
        let mut deg = self.degree();
        for (&cur, &cff) in self.terms.iter().rev() {
            result = result * x.powi(deg - cur) + cff;
            deg = cur;
        }
        result
    }
}

impl<T: FloatScalar> Evaluate<T> for Polynomial<T> {
    fn evaluate(&self, x: T) -> T {
        Polynomial::evaluate(self, x)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: FloatScalar + fmt::Display> fmt::Display for Polynomial<T> {
    /// Descending-degree rendering for diagnostics: `x^2 - 5x + 6`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (&deg, &val) in self.terms.iter().rev() {
            if val == T::zero() {
                continue;
            }
            if val < T::zero() {
                write!(f, "{}", if first { "-" } else { " - " })?;
            } else if !first {
                write!(f, " + ")?;
            }
            let abs = val.abs();
            if abs != T::one() || deg == 0 {
                write!(f, "{abs}")?;
            }
            if deg != 0 {
                write!(f, "x")?;
                if deg != 1 {
                    write!(f, "^{deg}")?;
                }
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
