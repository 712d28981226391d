use curvi_solve::{derivative, quadrature, root};
use thiserror::Error as ThisError;

/// Errors that can occur when evaluating a particle's motion.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("time must be finite and non-negative, got {t}")]
    InvalidTime { t: f64 },

    #[error("sample count must be at least 2, got {n}")]
    TooFewSamples { n: usize },

    #[error("tangent is vertical at t = {t} (dx/dt is zero)")]
    VerticalTangent { t: f64 },

    #[error("integration failed")]
    Quadrature(#[from] quadrature::Error),

    #[error("differentiation failed")]
    Derivative(#[from] derivative::Error),

    #[error("root search failed")]
    Root(#[from] root::Error),
}
