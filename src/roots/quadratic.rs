use log::debug;
use num_complex::Complex;

use crate::polynomial::Polynomial;

use super::Finder;

impl Finder {
    /// Closed-form solution of `a·x² + b·x + c`, appending the roots found.
    ///
    /// Called both for a degree-2 residual and for each quadratic factor
    /// extracted by deflation. Zero leading coefficients are not guarded:
    /// they produce the IEEE infinities/NaNs of the underlying divisions.
    pub(super) fn quadratic(&mut self, p: &Polynomial<f64>) {
        debug!("solving second degree polynomial: {p}");

        let c = p.coefficient(0);
        let b = p.coefficient(1);
        let a = p.coefficient(2);

        if b == 0.0 {
            if a == 0.0 {
                // No solution, or every x is one. Nothing to record.
                return;
            }

            let val = -c / a;
            if val > 0.0 {
                // Pure real pair ±√val.
                self.push(Complex::new(-val.sqrt() as f32, 0.0));
                self.push(Complex::new(val.sqrt() as f32, 0.0));
            } else {
                // Pure imaginary pair ±i·√(−val).
                self.push(Complex::new(0.0, -(-val).sqrt() as f32));
                self.push(Complex::new(0.0, (-val).sqrt() as f32));
            }
            return;
        }

        let disc = b * b - 4.0 * a * c;
        debug!("discriminant: {disc}");

        if disc == 0.0 {
            self.push(Complex::new((-b / (2.0 * a)) as f32, 0.0));
            return;
        }

        if disc > 0.0 {
            // Sign-matched sqrt keeps b + sqrt away from cancellation; the
            // second root comes from the product c/a through the first.
            let sqrt = b.signum() * disc.sqrt();
            let val1 = (-(b + sqrt) / (2.0 * a)) as f32;
            let val2 = (c / (a * val1 as f64)) as f32;
            self.push(Complex::new(val1, 0.0));
            self.push(Complex::new(val2, 0.0));
            return;
        }

        let sqrt = (-disc).sqrt();
        let real = (-b / (2.0 * a)) as f32;
        self.push(Complex::new(real, (-sqrt / (2.0 * a)) as f32));
        self.push(Complex::new(real, (sqrt / (2.0 * a)) as f32));
    }
}
