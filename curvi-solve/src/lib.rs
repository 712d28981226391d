//! Numerical routines for evaluating parametric curves.
//!
//! Every routine here operates on an [`Integrand`], a deterministic scalar
//! function of one real variable:
//!
//! - [`quadrature`] — adaptive Gauss–Kronrod definite integration
//! - [`derivative`] — central finite-difference differentiation
//! - [`root`] — bisection root finding on a bracketed interval
//!
//! Solvers accept an [`Observer`] so callers can watch or stop an iteration
//! without changing the solver API.
//!
//! [`Integrand`]: curvi_core::Integrand

mod observe;

pub mod derivative;
pub mod quadrature;
pub mod root;

pub use observe::Observer;
