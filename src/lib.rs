//! # radicis
//!
//! Univariate real-coefficient polynomial algebra with a numerical root
//! finder, no-std compatible. Polynomials are stored sparsely (degree →
//! coefficient), support the usual ring arithmetic plus long division into
//! quotient/remainder form, and can have all of their (possibly complex)
//! roots extracted using only real arithmetic: Bairstow's method peels off
//! real quadratic factors until a linear or quadratic residual remains,
//! which is solved in closed form.
//!
//! ## Quick start
//!
//! ```
//! use radicis::Polynomial;
//!
//! // x² - 5x + 6 = (x - 2)(x - 3)
//! let p = Polynomial::from_coefficients(&[1.0, -5.0, 6.0]);
//! let mut roots = p.real_roots();
//! roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
//! assert_eq!(roots, [2.0, 3.0]);
//!
//! // x² + 1 has no real roots, but two complex ones
//! let p = Polynomial::from_coefficients(&[1.0, 0.0, 1.0]);
//! assert!(p.real_roots().is_empty());
//! assert_eq!(p.complex_roots().len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`polynomial`] — Sparse `Polynomial<T>` with degree queries, term-wise
//!   and convolution arithmetic (via `core::ops` operators), scalar
//!   operations, sparse Horner evaluation, and parsing from `cx^p` text.
//!
//! - [`rational`] — `Rational<T>`: the quotient + proper-remainder
//!   decomposition produced by polynomial long division. Evaluates as
//!   `q(x) + r(x)/d(x)`.
//!
//! - [`roots`] — Root extraction over `Polynomial<f64>`. Degree ≤ 2 is
//!   solved in closed form; higher degrees are deflated with Bairstow's
//!   method under a configurable iteration cap ([`roots::RootSettings`]).
//!   Roots come back as `Complex<f32>` in discovery order.
//!
//! - [`traits`] — Element trait hierarchy ([`Scalar`], [`FloatScalar`]) and
//!   the [`Evaluate`] capability implemented by polynomials and rationals.
//!
//! ## Diagnostics
//!
//! The root finder emits `log::debug!` progress lines (current residual,
//! discriminants, each root as found, deflation divisor/remainder). Install
//! any `log` backend to see them; with no backend they compile to nothing.
//! The trace output never affects results.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware float math via the system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std targets |
//!
//! The crate always requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod polynomial;
pub mod rational;
pub mod roots;
pub mod traits;

pub use polynomial::{ParseError, Polynomial};
pub use rational::Rational;
pub use roots::{complex_roots, real_roots, RootSettings};
pub use traits::{Evaluate, FloatScalar, Scalar};

pub use num_complex::Complex;
