use alloc::vec;
use log::debug;

use crate::polynomial::Polynomial;

use super::Finder;

impl Finder {
    /// One Bairstow pass: fit a quadratic factor `x² + u·x + v` to the
    /// current residual, record its two roots, and replace the residual
    /// with the deflated quotient.
    ///
    /// The iteration refines `(u, v)` by Newton's method on the division
    /// remainders, stopping early only when both corrections are exactly
    /// zero. Exhausting the cap is not an error: the factor reached by the
    /// last iteration is used as-is.
    pub(super) fn deflate(&mut self) {
        debug!("solving higher degree polynomial: {}", self.poly);

        let deg = self.poly.degree() as usize;
        let coef = self.poly.coefficients();
        let mut b = vec![0.0_f64; deg + 1];
        let mut f = vec![0.0_f64; deg + 1];

        // Initial guesses for the trial factor, from the leading terms.
        let mut u = coef[deg - 1] / coef[deg];
        let mut v = coef[deg - 2] / coef[deg];
        if u == 0.0 {
            u = 1.0;
        }
        if v == 0.0 {
            v = 1.0;
        }

        for i in 0..self.max_iter {
            // Synthetic division of the coefficients by x² + u·x + v, and
            // of the resulting b-sequence by the same factor. Entries above
            // deg - 2 stay zero, standing in for out-of-range terms.
            for d in (0..=deg - 2).rev() {
                b[d] = coef[d + 2] - u * b[d + 1] - v * b[d + 2];
                f[d] = b[d + 2] - u * f[d + 1] - v * f[d + 2];
            }

            // Remainders of the first and second divisions.
            let c = coef[1] - u * b[0] - v * b[1];
            let d = coef[0] - v * b[0];
            let g = b[1] - u * f[0] - v * f[1];
            let h = b[0] - v * f[0];

            // Newton corrections from the 2×2 system in (u, v).
            let denom = h * h - g * h * u + g * g * v;
            let u_err = (c * h - d * g) / denom;
            let v_err = (d * h - d * g * u + c * g * v) / denom;

            u += u_err;
            v += v_err;

            if u_err == 0.0 && v_err == 0.0 {
                debug!("iterations: {i}");
                break;
            }
        }

        let divisor = Polynomial::from_coefficients(&[1.0, u, v]);

        // The b-sequence is the deflated quotient, lowest degree first.
        let mut rev = b;
        rev.reverse();
        let quotient = Polynomial::from_coefficients(&rev);

        debug!("divisor: {divisor}");
        debug!("remainder: {quotient}");

        self.poly = quotient;
        self.quadratic(&divisor);
    }
}
