use std::convert::Infallible;

/// A deterministic scalar function of one real variable.
///
/// Integrands must always produce the same value for a given `t`, which makes
/// them a stable foundation for quadrature, differentiation, and root finding.
pub trait Integrand {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `t`.
    ///
    /// # Errors
    ///
    /// Each integrand defines its own `Error` type to represent points where
    /// the function is undefined.
    fn eval(&self, t: f64) -> Result<f64, Self::Error>;
}

/// Blanket implementation for closed-form closures.
///
/// Any `Fn(f64) -> f64` is an infallible integrand. Functions with a
/// restricted domain can implement [`Integrand`] on a named type instead and
/// report undefined points through their own error.
impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, t: f64) -> Result<f64, Self::Error> {
        Ok(self(t))
    }
}
