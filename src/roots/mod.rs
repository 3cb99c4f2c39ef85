//! Numerical root extraction for real-coefficient polynomials.
//!
//! All (possibly complex) roots are located using only real arithmetic.
//! Degree 1 and 2 residuals are solved in closed form; anything higher is
//! reduced with Bairstow's method, which extracts one real quadratic factor
//! per pass and continues on the deflated quotient. Complex-conjugate pairs
//! fall out of the quadratic factors without any complex iteration.
//!
//! Bairstow's method is a Newton-style heuristic, not a guaranteed
//! algorithm: each extraction runs until its corrections reach exactly zero
//! or the iteration cap is spent, and an exhausted cap still yields a
//! (possibly inaccurate) factor rather than an error. Roots are reported in
//! discovery order, highest-degree factors first.
//!
//! Working arithmetic is `f64`; root components are demoted to `f32` at the
//! moment each root is formed. A root counts as real when its imaginary
//! part is exactly zero — the zero is written as a literal by every real
//! branch, so no tolerance is involved.
//!
//! # Example
//!
//! ```
//! use radicis::{complex_roots, Polynomial, RootSettings};
//!
//! // x³ - 6x² + 11x - 6 = (x - 1)(x - 2)(x - 3)
//! let p = Polynomial::from_coefficients(&[1.0, -6.0, 11.0, -6.0]);
//! let roots = complex_roots(&p, &RootSettings::default());
//! assert_eq!(roots.len(), 3);
//! assert!(roots.iter().all(|r| r.im == 0.0));
//! ```

mod bairstow;
mod quadratic;


use alloc::vec::Vec;
use log::debug;
use num_complex::Complex;

use crate::polynomial::Polynomial;

/// Settings for the root finder.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings {
    /// Maximum number of Bairstow iterations per extracted quadratic factor.
    pub max_iter: usize,
}

impl Default for RootSettings {
    fn default() -> Self {
        Self { max_iter: 1024 }
    }
}

/// Find all complex roots of `p`, in discovery order.
///
/// A polynomial of degree `n > 0` yields `n` roots (counted with
/// multiplicity) except that a repeated quadratic root is reported once.
/// Degree ≤ 0 input yields no roots.
///
/// # Example
///
/// ```
/// use num_complex::Complex;
/// use radicis::{complex_roots, Polynomial, RootSettings};
///
/// let p = Polynomial::from_coefficients(&[1.0, 0.0, 1.0]); // x² + 1
/// let roots = complex_roots(&p, &RootSettings::default());
/// assert_eq!(roots, [Complex::new(0.0, -1.0), Complex::new(0.0, 1.0)]);
/// ```
pub fn complex_roots(p: &Polynomial<f64>, settings: &RootSettings) -> Vec<Complex<f32>> {
    let mut finder = Finder::new(p, settings);
    finder.run();
    finder.roots
}

/// Find the real roots of `p`, in discovery order.
///
/// A root is real when its imaginary component is exactly zero; roots with
/// any non-zero imaginary part are dropped.
///
/// # Example
///
/// ```
/// use radicis::{real_roots, Polynomial, RootSettings};
///
/// let p = Polynomial::from_coefficients(&[1.0, 0.0, -4.0]); // x² - 4
/// assert_eq!(real_roots(&p, &RootSettings::default()), [-2.0, 2.0]);
/// ```
pub fn real_roots(p: &Polynomial<f64>, settings: &RootSettings) -> Vec<f32> {
    let mut finder = Finder::new(p, settings);
    finder.run();
    finder.roots.retain(|root| root.im == 0.0);
    finder.roots.iter().map(|root| root.re).collect()
}

impl Polynomial<f64> {
    /// All complex roots, with default settings. See [`complex_roots`].
    pub fn complex_roots(&self) -> Vec<Complex<f32>> {
        complex_roots(self, &RootSettings::default())
    }

    /// The real roots, with default settings. See [`real_roots`].
    ///
    /// ```
    /// use radicis::Polynomial;
    ///
    /// let p = Polynomial::from_coefficients(&[2.0, 4.0]); // 2x + 4
    /// assert_eq!(p.real_roots(), [-2.0]);
    /// ```
    pub fn real_roots(&self) -> Vec<f32> {
        real_roots(self, &RootSettings::default())
    }
}

/// Per-call working state: the current residual polynomial and the roots
/// accumulated so far. Each `*_roots` call builds its own `Finder`, so
/// concurrent calls never share state.
struct Finder {
    poly: Polynomial<f64>,
    roots: Vec<Complex<f32>>,
    max_iter: usize,
}

impl Finder {
    fn new(p: &Polynomial<f64>, settings: &RootSettings) -> Self {
        Self {
            poly: p.clone(),
            roots: Vec::new(),
            max_iter: settings.max_iter,
        }
    }

    /// Degree-dispatch loop, re-entered after every deflation.
    fn run(&mut self) {
        while self.poly.degree() > 0 {
            match self.poly.degree() {
                1 => {
                    self.linear();
                    break;
                }
                2 => {
                    let p = self.poly.clone();
                    self.quadratic(&p);
                    break;
                }
                _ => self.deflate(),
            }
        }
    }

    fn linear(&mut self) {
        debug!("solving first degree polynomial: {}", self.poly);

        let coef0 = self.poly.coefficient(0) as f32;
        let coef1 = self.poly.coefficient(1) as f32;
        self.push(Complex::new(-coef0 / coef1, 0.0));
    }

    fn push(&mut self, root: Complex<f32>) {
        debug!("found root: {root}");
        self.roots.push(root);
    }
}
