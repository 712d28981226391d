//! Bisection root finding on a bracketed interval.
//!
//! The residual is the integrand's own value; to solve `f(t) = target`,
//! pass the closure `|t| f(t) - target`.

mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use curvi_core::Integrand;

use crate::Observer;

/// Control actions supported by the bisection solver.
pub enum Action {
    /// Stop the solver early and report the best estimate seen so far.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
pub struct Event {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Current search bracket.
    pub bracket: [f64; 2],
    /// Current midpoint.
    pub t: f64,
    /// Residual at the midpoint.
    pub residual: f64,
}

/// Finds a root of the residual function using the bisection method.
/// Observers see each iteration's midpoint and bracket state.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the config is invalid, or the
/// residual function fails or produces a non-finite value.
pub fn bisect<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Integrand,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut left, mut right) = validate_bracket(bracket)?;

    let mut left_residual = residual_at(f, left)?;
    if left_residual.abs() <= config.residual_tol {
        return Ok(Solution {
            status: Status::Converged,
            t: left,
            residual: left_residual,
            iters: 0,
        });
    }

    let right_residual = residual_at(f, right)?;
    if right_residual.abs() <= config.residual_tol {
        return Ok(Solution {
            status: Status::Converged,
            t: right,
            residual: right_residual,
            iters: 0,
        });
    }

    if left_residual.signum() == right_residual.signum() {
        return Err(Error::NoBracket {
            left,
            right,
            left_residual,
            right_residual,
        });
    }

    let (mut best_t, mut best_residual) = if left_residual.abs() <= right_residual.abs() {
        (left, left_residual)
    } else {
        (right, right_residual)
    };

    for iter in 1..=config.max_iters {
        let mid = 0.5 * (left + right);
        let mid_residual = residual_at(f, mid)?;

        let t_converged = (right - left).abs() <= config.t_abs_tol + config.t_rel_tol * mid.abs();
        let residual_converged = mid_residual.abs() <= config.residual_tol;
        let is_better = mid_residual.abs() < best_residual.abs();

        let event = Event {
            iter,
            bracket: [left, right],
            t: mid,
            residual: mid_residual,
        };

        if let Some(Action::StopEarly) = observer.on_event(&event) {
            let (t, residual) = if is_better {
                (mid, mid_residual)
            } else {
                (best_t, best_residual)
            };
            return Ok(Solution {
                status: Status::StoppedByObserver,
                t,
                residual,
                iters: iter,
            });
        }

        if t_converged || residual_converged {
            return Ok(Solution {
                status: Status::Converged,
                t: mid,
                residual: mid_residual,
                iters: iter,
            });
        }

        if is_better {
            best_t = mid;
            best_residual = mid_residual;
        }

        if left_residual.signum() == mid_residual.signum() {
            left = mid;
            left_residual = mid_residual;
        } else {
            right = mid;
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        t: best_t,
        residual: best_residual,
        iters: config.max_iters,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Same failure modes as [`bisect`].
pub fn bisect_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Integrand,
{
    bisect(f, bracket, config, ())
}

/// Checks the bracket endpoints and orders them so left < right.
fn validate_bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [left, right] = bracket;

    if !left.is_finite() {
        return Err(Error::NonFiniteBracket { value: left });
    }

    if !right.is_finite() {
        return Err(Error::NonFiniteBracket { value: right });
    }

    #[allow(clippy::float_cmp)]
    if left == right {
        return Err(Error::ZeroWidthBracket { value: left });
    }

    if left < right {
        Ok((left, right))
    } else {
        Ok((right, left))
    }
}

fn residual_at<F>(f: &F, t: f64) -> Result<f64, Error>
where
    F: Integrand,
{
    let residual = f.eval(t).map_err(|e| Error::Residual(Box::new(e)))?;
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { t, residual })
    }
}
