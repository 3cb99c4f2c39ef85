use num_complex::Complex;
use radicis::{complex_roots, real_roots, Evaluate, Polynomial, Rational, RootSettings};

const TOL: f32 = 1e-5;

fn poly(coefs: &[f64]) -> Polynomial<f64> {
    Polynomial::from_coefficients(coefs)
}

fn assert_near(a: f32, b: f32, msg: &str) {
    assert!((a - b).abs() < TOL, "{}: {} vs {}", msg, a, b);
}

// ── Data model conventions ───────────────────────────────────────────

#[test]
fn zero_polynomial_degree_convention() {
    // p + (-p) is the zero polynomial, which reports degree 0 rather than
    // a "no terms" sentinel; the root finder treats it as rootless.
    let p = poly(&[1.0, -5.0, 6.0]);
    let z = &p + &(-&p);
    assert_eq!(z.degree(), 0);
    assert!(z.complex_roots().is_empty());
}

// ── Closed forms ─────────────────────────────────────────────────────

#[test]
fn linear_root_is_exact() {
    for (a, b) in [(2.0, 4.0), (3.0, -1.5), (-7.0, 2.0)] {
        let roots = poly(&[a, b]).real_roots();
        assert_eq!(roots.len(), 1);
        assert_near(roots[0], (-b / a) as f32, "linear root");
    }
}

#[test]
fn quadratic_positive_discriminant_vieta() {
    // 2x² - 7x + 3: roots 3 and 1/2
    let roots = poly(&[2.0, -7.0, 3.0]).real_roots();
    assert_eq!(roots.len(), 2);
    assert_near(roots[0] * roots[1], 3.0 / 2.0, "product c/a");
    assert_near(roots[0] + roots[1], 7.0 / 2.0, "sum -b/a");
}

#[test]
fn quadratic_negative_discriminant_conjugates() {
    // x² + x + 1
    let p = poly(&[1.0, 1.0, 1.0]);
    assert!(p.real_roots().is_empty());

    let roots = p.complex_roots();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].re, roots[1].re);
    assert_eq!(roots[0].im, -roots[1].im);
    assert!(roots[0].im != 0.0);
}

// ── Concrete factorizations ──────────────────────────────────────────

#[test]
fn factorable_quadratic() {
    let p = poly(&[1.0, -5.0, 6.0]);

    let mut real = p.real_roots();
    real.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(real, [2.0, 3.0]);

    let complex = p.complex_roots();
    assert_eq!(complex.len(), 2);
    assert!(complex.iter().all(|r| r.im == 0.0));
}

#[test]
fn unit_circle_quadratic() {
    let p = poly(&[1.0, 0.0, 1.0]);
    assert!(p.real_roots().is_empty());
    assert_eq!(
        p.complex_roots(),
        [Complex::new(0.0, -1.0), Complex::new(0.0, 1.0)]
    );
}

#[test]
fn cubic_via_deflation() {
    let p = poly(&[1.0, -6.0, 11.0, -6.0]);
    let mut real = p.real_roots();
    real.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(real.len(), 3);
    assert_near(real[0], 1.0, "cubic root 1");
    assert_near(real[1], 2.0, "cubic root 2");
    assert_near(real[2], 3.0, "cubic root 3");
}

#[test]
fn parse_to_roots_pipeline() {
    let p: Polynomial<f64> = Polynomial::parse("x", "x^3 - 6x^2 + 11x - 6").unwrap();
    let mut real = real_roots(&p, &RootSettings::default());
    real.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(real.len(), 3);
    assert_near(real[1], 2.0, "middle root");
}

#[test]
fn explicit_settings_match_defaults() {
    let p = poly(&[1.0, 0.0, -5.0, 0.0, 4.0]);
    let settings = RootSettings { max_iter: 1024 };
    assert_eq!(complex_roots(&p, &settings), p.complex_roots());
}

// ── Division round trips ─────────────────────────────────────────────

#[test]
fn divide_by_self_is_one() {
    let p = poly(&[1.0, -5.0, 6.0]);
    let r = &p / &p;
    assert_eq!(r.quotient(), &poly(&[1.0]));
    assert_eq!(r.remainder(), &Polynomial::new());
}

#[test]
fn multiply_divide_idempotence() {
    let p = poly(&[1.0, 2.0, 3.0]);
    let factor = poly(&[1.0, 4.0]);
    let r = &(&p * &factor) / &factor;
    assert_eq!(r.quotient(), &p);
    assert_eq!(r.remainder(), &Polynomial::new());
}

#[test]
fn rational_evaluates_as_mixed_fraction() {
    // (x³ + 2) / (x² + 1) = x + (-x + 2)/(x² + 1)
    let r = Rational::new(&poly(&[1.0, 0.0, 0.0, 2.0]), &poly(&[1.0, 0.0, 1.0]));
    let x = 3.0;
    let expected = 3.0 + (-x + 2.0) / (x * x + 1.0);
    assert!((r.evaluate(x) - expected).abs() < 1e-12);
}

#[test]
fn polynomials_compose_through_evaluate() {
    fn bisect_once<F: Evaluate<f64>>(f: &F, a: f64, b: f64) -> f64 {
        let mid = (a + b) / 2.0;
        if f.evaluate(a) * f.evaluate(mid) <= 0.0 {
            mid
        } else {
            b
        }
    }
    let p = poly(&[1.0, -2.0]); // x - 2
    assert_eq!(bisect_once(&p, 0.0, 8.0), 4.0);
}
