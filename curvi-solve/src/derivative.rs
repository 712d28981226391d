//! Central finite-difference differentiation.
//!
//! Five-point stencils give fourth-order accuracy for smooth functions,
//! which is plenty for derivative-of-a-closed-form work like acceleration
//! components.

use std::error::Error as StdError;

use curvi_core::Integrand;
use thiserror::Error as ThisError;

/// Configuration for the finite-difference stencils.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Stencil spacing.
    pub step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { step: 1e-5 }
    }
}

impl Config {
    /// Validates the stencil spacing.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is non-finite or not positive.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err("step must be finite and positive");
        }
        Ok(())
    }
}

/// Errors that can occur during differentiation.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("integrand evaluation failed")]
    Integrand(#[source] Box<dyn StdError + Send + Sync>),

    #[error("stencil produced a non-finite derivative at t = {t}")]
    NonFiniteStencil { t: f64 },
}

/// Estimates `f'(t)` with a five-point central stencil.
///
/// # Errors
///
/// Returns an error if the config is invalid, the integrand fails, or the
/// stencil combines to a non-finite value.
pub fn first<F>(f: &F, t: f64, config: &Config) -> Result<f64, Error>
where
    F: Integrand,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let h = config.step;
    let [below2, below1, above1, above2] = wings(f, t, h)?;

    let derivative = (below2 - 8.0 * below1 + 8.0 * above1 - above2) / (12.0 * h);
    finite(derivative, t)
}

/// Estimates `f''(t)` with a five-point central stencil.
///
/// # Errors
///
/// Same failure modes as [`first`].
pub fn second<F>(f: &F, t: f64, config: &Config) -> Result<f64, Error>
where
    F: Integrand,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let h = config.step;
    let center = sample(f, t)?;
    let [below2, below1, above1, above2] = wings(f, t, h)?;

    let derivative =
        (-below2 + 16.0 * below1 - 30.0 * center + 16.0 * above1 - above2) / (12.0 * h * h);
    finite(derivative, t)
}

/// Samples the four off-center stencil points, nearest first.
fn wings<F>(f: &F, t: f64, h: f64) -> Result<[f64; 4], Error>
where
    F: Integrand,
{
    Ok([
        sample(f, t - 2.0 * h)?,
        sample(f, t - h)?,
        sample(f, t + h)?,
        sample(f, t + 2.0 * h)?,
    ])
}

fn sample<F>(f: &F, t: f64) -> Result<f64, Error>
where
    F: Integrand,
{
    f.eval(t).map_err(|e| Error::Integrand(Box::new(e)))
}

fn finite(derivative: f64, t: f64) -> Result<f64, Error> {
    if derivative.is_finite() {
        Ok(derivative)
    } else {
        Err(Error::NonFiniteStencil { t })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn differentiates_polynomial() {
        let f = |t: f64| t * t * t;

        let d = first(&f, 2.0, &Config::default()).expect("should differentiate");

        assert_relative_eq!(d, 12.0, epsilon = 1e-8);
    }

    #[test]
    fn differentiates_exp_of_cosine() {
        // d/dt e^{cos t} = -sin(t) e^{cos t}
        let f = |t: f64| t.cos().exp();
        let expected = -1.0_f64.sin() * 1.0_f64.cos().exp();

        let d = first(&f, 1.0, &Config::default()).expect("should differentiate");

        assert_relative_eq!(d, expected, epsilon = 1e-9);
    }

    #[test]
    fn second_derivative_of_sine() {
        let f = |t: f64| t.sin();

        let d = second(&f, 1.0, &Config::default()).expect("should differentiate");

        assert_relative_eq!(d, -1.0_f64.sin(), epsilon = 1e-5);
    }

    #[test]
    fn errors_on_invalid_step() {
        let config = Config { step: 0.0 };

        let result = first(&|t: f64| t, 1.0, &config);

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn errors_on_non_finite_stencil() {
        // 1/t has a stencil point at the pole when t = step.
        let config = Config::default();
        let result = first(&|t: f64| 1.0 / t, config.step, &config);

        assert!(matches!(result, Err(Error::NonFiniteStencil { .. })));
    }
}
