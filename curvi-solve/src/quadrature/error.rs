use std::error::Error as StdError;

use curvi_core::IntervalError;
use thiserror::Error;

/// Errors that can occur during adaptive quadrature.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("invalid integration interval")]
    Interval(#[from] IntervalError),

    #[error("integrand evaluation failed")]
    Integrand(#[source] Box<dyn StdError + Send + Sync>),

    #[error("integrand produced non-finite value {value} at t = {t}")]
    NonFiniteSample { t: f64, value: f64 },

    #[error(
        "error estimate {error} exceeds local budget {budget} on [{left}, {right}] at maximum subdivision depth"
    )]
    ToleranceNotMet {
        left: f64,
        right: f64,
        error: f64,
        budget: f64,
    },
}
