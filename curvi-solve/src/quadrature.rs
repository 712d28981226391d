//! Adaptive Gauss–Kronrod quadrature.
//!
//! Each subinterval is evaluated with the 7-point Gauss rule and its 15-point
//! Kronrod extension; the difference between the two estimates drives
//! refinement. A subinterval is accepted when its error estimate meets a
//! width-proportional share of the total tolerance, otherwise it is split at
//! its midpoint, down to a bounded depth.

mod config;
mod error;
mod estimate;

pub use config::Config;
pub use error::Error;
pub use estimate::{Estimate, Status};

use curvi_core::{Integrand, Interval};

use crate::Observer;

/// Control actions supported by the quadrature routine.
pub enum Action {
    /// Stop refining and return the partial estimate.
    StopEarly,
}

/// Refinement event emitted when a subinterval is accepted.
pub struct Event {
    /// Count of accepted subintervals so far (1-based).
    pub accepted: usize,
    /// Bounds of the accepted subinterval.
    pub interval: [f64; 2],
    /// Subdivision depth of the subinterval (0 is the full interval).
    pub depth: usize,
    /// Kronrod estimate over the subinterval.
    pub value: f64,
    /// Local error estimate over the subinterval.
    pub error: f64,
}

// Abscissae of the 15-point Kronrod rule on [-1, 1], excluding the center.
// The odd-indexed entries are the nodes of the embedded 7-point Gauss rule.
const XGK: [f64; 7] = [
    0.991_455_371_120_812_639_2,
    0.949_107_912_342_758_524_5,
    0.864_864_423_359_769_072_8,
    0.741_531_185_599_394_439_9,
    0.586_087_235_467_691_130_3,
    0.405_845_151_377_397_166_9,
    0.207_784_955_007_898_467_6,
];

const WGK: [f64; 7] = [
    0.022_935_322_010_529_224_96,
    0.063_092_092_629_978_553_29,
    0.104_790_010_322_250_183_8,
    0.140_653_259_715_525_918_7,
    0.169_004_726_639_267_902_8,
    0.190_350_578_064_785_409_9,
    0.204_432_940_075_298_892_4,
];

const WGK_CENTER: f64 = 0.209_482_141_084_727_828_0;

const WG: [f64; 3] = [
    0.129_484_966_168_869_693_3,
    0.279_705_391_489_276_667_9,
    0.381_830_050_505_118_944_9,
];

const WG_CENTER: f64 = 0.417_959_183_673_469_387_8;

/// Estimates the definite integral of `f` over `interval`.
/// Observers see each accepted subinterval and may stop refinement early.
///
/// A degenerate interval integrates to exactly zero with zero error and no
/// integrand evaluations.
///
/// # Errors
///
/// Returns an error if the config is invalid, the integrand fails or
/// produces a non-finite value, or a subinterval still exceeds its error
/// budget at the maximum subdivision depth.
pub fn integrate<F, Obs>(
    f: &F,
    interval: Interval,
    config: &Config,
    mut observer: Obs,
) -> Result<Estimate, Error>
where
    F: Integrand,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if interval.is_degenerate() {
        return Ok(Estimate {
            value: 0.0,
            error: 0.0,
            intervals: 0,
            status: Status::Converged,
        });
    }

    let total_width = interval.width();
    let mut pending = vec![(interval, 0usize)];
    let mut value = 0.0;
    let mut error = 0.0;
    let mut accepted = 0usize;

    while let Some((segment, depth)) = pending.pop() {
        let rule = kronrod_15(f, segment)?;
        let budget = config.tolerance * (segment.width() / total_width);

        if rule.error > budget {
            if depth >= config.max_depth {
                return Err(Error::ToleranceNotMet {
                    left: segment.a(),
                    right: segment.b(),
                    error: rule.error,
                    budget,
                });
            }
            let (left, right) = segment.halves();
            // Left half on top of the stack, so segments are accepted in
            // left-to-right order.
            pending.push((right, depth + 1));
            pending.push((left, depth + 1));
            continue;
        }

        value += rule.value;
        error += rule.error;
        accepted += 1;

        let event = Event {
            accepted,
            interval: [segment.a(), segment.b()],
            depth,
            value: rule.value,
            error: rule.error,
        };

        if let Some(Action::StopEarly) = observer.on_event(&event) {
            return Ok(Estimate {
                value,
                error,
                intervals: accepted,
                status: Status::StoppedByObserver,
            });
        }
    }

    Ok(Estimate {
        value,
        error,
        intervals: accepted,
        status: Status::Converged,
    })
}

/// Runs quadrature without observation.
///
/// # Errors
///
/// Same failure modes as [`integrate`].
pub fn integrate_unobserved<F>(
    f: &F,
    interval: Interval,
    config: &Config,
) -> Result<Estimate, Error>
where
    F: Integrand,
{
    integrate(f, interval, config, ())
}

/// Integrates `f` over `[a, b]` with the default configuration.
///
/// # Errors
///
/// Returns an error if `[a, b]` is not a valid interval, in addition to the
/// failure modes of [`integrate`].
pub fn integrate_fn<F>(f: &F, a: f64, b: f64) -> Result<Estimate, Error>
where
    F: Integrand,
{
    let interval = Interval::new(a, b)?;
    integrate_unobserved(f, interval, &Config::default())
}

struct RuleEstimate {
    value: f64,
    error: f64,
}

/// Applies the Gauss 7 / Kronrod 15 rule pair to one segment.
fn kronrod_15<F>(f: &F, segment: Interval) -> Result<RuleEstimate, Error>
where
    F: Integrand,
{
    let center = segment.midpoint();
    let half_width = 0.5 * segment.width();

    let f_center = sample(f, center)?;
    let mut kronrod = WGK_CENTER * f_center;
    let mut gauss = WG_CENTER * f_center;

    for (j, &abscissa) in XGK.iter().enumerate() {
        let offset = half_width * abscissa;
        let pair = sample(f, center - offset)? + sample(f, center + offset)?;
        kronrod += WGK[j] * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    Ok(RuleEstimate {
        value: kronrod * half_width,
        error: (kronrod - gauss).abs() * half_width,
    })
}

fn sample<F>(f: &F, t: f64) -> Result<f64, Error>
where
    F: Integrand,
{
    let value = f.eval(t).map_err(|e| Error::Integrand(Box::new(e)))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteSample { t, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use thiserror::Error as ThisError;

    #[test]
    fn integrates_sine_over_half_period() {
        let estimate = integrate_fn(&|t: f64| t.sin(), 0.0, PI).expect("should integrate");

        assert_eq!(estimate.status, Status::Converged);
        assert_relative_eq!(estimate.value, 2.0, epsilon = 1e-9);
        assert!(estimate.error <= Config::default().tolerance);
    }

    #[test]
    fn integrates_polynomial_exactly() {
        // The 15-point Kronrod rule is exact for polynomials of this degree,
        // so a single segment suffices.
        let estimate = integrate_fn(&|t: f64| t * t, 0.0, 1.0).expect("should integrate");

        assert_eq!(estimate.intervals, 1);
        assert_relative_eq!(estimate.value, 1.0 / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn integrates_exp_of_cosine() {
        // Reference value computed independently with adaptive Simpson.
        let estimate = integrate_fn(&|t: f64| t.cos().exp(), 0.0, 1.0).expect("should integrate");

        assert_relative_eq!(estimate.value, 2.341_574_841_713_05, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_interval_is_exactly_zero() {
        let estimate = integrate_fn(&|t: f64| t.exp(), 2.0, 2.0).expect("should integrate");

        assert_eq!(estimate.value, 0.0);
        assert_eq!(estimate.error, 0.0);
        assert_eq!(estimate.intervals, 0);
        assert_eq!(estimate.status, Status::Converged);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn repeated_calls_return_identical_estimates() {
        let f = |t: f64| (2.0 * t).sin() * t.exp();
        let interval = Interval::new(0.0, 3.0).unwrap();
        let config = Config::default();

        let first = integrate_unobserved(&f, interval, &config).expect("should integrate");
        let second = integrate_unobserved(&f, interval, &config).expect("should integrate");

        assert_eq!(first.value, second.value);
        assert_eq!(first.error, second.error);
        assert_eq!(first.intervals, second.intervals);
    }

    #[test]
    fn rejects_reversed_bounds() {
        let result = integrate_fn(&|t: f64| t, 1.0, 0.0);

        assert!(matches!(result, Err(Error::Interval(_))));
    }

    #[test]
    fn errors_on_non_finite_sample() {
        // 1/t blows up at the center of the full interval.
        let result = integrate_fn(&|t: f64| 1.0 / t, -1.0, 1.0);

        assert!(matches!(result, Err(Error::NonFiniteSample { .. })));
    }

    /// Integrand defined only for strictly positive inputs.
    struct PositiveLog;

    #[derive(Debug, ThisError)]
    #[error("log is undefined at t = {t}")]
    struct LogUndefined {
        t: f64,
    }

    impl Integrand for PositiveLog {
        type Error = LogUndefined;

        fn eval(&self, t: f64) -> Result<f64, Self::Error> {
            if t > 0.0 {
                Ok(t.ln())
            } else {
                Err(LogUndefined { t })
            }
        }
    }

    #[test]
    fn propagates_integrand_failure() {
        let result = integrate_fn(&PositiveLog, -1.0, 1.0);

        assert!(matches!(result, Err(Error::Integrand(_))));
    }

    #[test]
    fn errors_when_depth_budget_is_exhausted() {
        let config = Config {
            tolerance: 1e-12,
            max_depth: 0,
        };
        let interval = Interval::new(0.0, 20.0).unwrap();

        let result = integrate_unobserved(&|t: f64| t.sin(), interval, &config);

        assert!(matches!(result, Err(Error::ToleranceNotMet { .. })));
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            tolerance: -1.0,
            ..Config::default()
        };
        let interval = Interval::new(0.0, 1.0).unwrap();

        let result = integrate_unobserved(&|t: f64| t, interval, &config);

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn observer_can_stop_refinement() {
        let config = Config {
            tolerance: 1e-12,
            ..Config::default()
        };
        let interval = Interval::new(0.0, 20.0).unwrap();

        let mut events = 0usize;
        let observer = |event: &Event| {
            events += 1;
            assert!(event.depth > 0);
            Some(Action::StopEarly)
        };

        let estimate = integrate(&|t: f64| t.sin(), interval, &config, observer)
            .expect("should stop cleanly");

        assert_eq!(estimate.status, Status::StoppedByObserver);
        assert_eq!(estimate.intervals, 1);
        assert_eq!(events, 1);
    }

    #[test]
    fn accepted_segments_tile_the_interval() {
        let interval = Interval::new(0.0, 20.0).unwrap();
        let config = Config {
            tolerance: 1e-10,
            ..Config::default()
        };

        let mut covered = 0.0;
        let mut previous_right = 0.0;
        let observer = |event: &Event| -> Option<Action> {
            assert_relative_eq!(event.interval[0], previous_right);
            previous_right = event.interval[1];
            covered += event.interval[1] - event.interval[0];
            None
        };

        integrate(&|t: f64| t.sin(), interval, &config, observer).expect("should integrate");

        assert_relative_eq!(covered, interval.width(), epsilon = 1e-12);
    }
}
