//! End-to-end check against a worked calculus problem.
//!
//! For `0 <= t <= pi`, a particle moves so that its position is
//! `(x(t), y(t))` with `y(t) = 2 sin t` and `dx/dt = e^{cos t}`; at `t = 0`
//! it sits at (1, 0). The published answers below were worked by hand, so
//! they are quoted to three decimals.

use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use curvi_core::Interval;
use curvi_motion::PlanarMotion;

fn particle() -> PlanarMotion<impl Fn(f64) -> f64, impl Fn(f64) -> f64, impl Fn(f64) -> f64> {
    PlanarMotion::new(
        1.0,
        |t: f64| t.cos().exp(),
        |t: f64| 2.0 * t.sin(),
        |t: f64| 2.0 * t.cos(),
    )
}

#[test]
fn acceleration_vector_at_one() {
    let [ax, ay] = particle().acceleration(1.0).expect("should evaluate");

    assert_relative_eq!(ax, -1.444, epsilon = 1e-3);
    assert_relative_eq!(ay, -1.683, epsilon = 1e-3);
}

#[test]
fn first_time_speed_reaches_one_and_a_half() {
    // The speed starts at e, dips below 1.5 before pi/2, so the first
    // crossing is bracketed by [0, pi/2].
    let t = particle()
        .time_at_speed(1.5, [0.0, FRAC_PI_2])
        .expect("should solve");

    assert_relative_eq!(t, 1.254, epsilon = 2e-3);
}

#[test]
fn tangent_slope_and_abscissa_at_one() {
    let motion = particle();

    let slope = motion.tangent_slope(1.0).expect("should evaluate");
    let position = motion.position(1.0).expect("should evaluate");

    assert_relative_eq!(slope, 0.630, epsilon = 1e-3);
    assert_relative_eq!(position.x, 3.342, epsilon = 1e-3);
}

#[test]
fn total_distance_traveled() {
    let interval = Interval::new(0.0, PI).expect("valid interval");

    let distance = particle().arclength(interval).expect("should integrate");

    assert_relative_eq!(distance, 6.035, epsilon = 1e-3);
}

#[test]
fn trace_for_plotting_spans_the_whole_path() {
    let motion = particle();
    let interval = Interval::new(0.0, PI).expect("valid interval");

    let trace = motion.sample_xy(interval, 200).expect("should sample");

    assert_eq!(trace.len(), 200);
    // Starts at (1, 0); y returns to 0 at t = pi while x keeps growing.
    assert_relative_eq!(trace[0][0], 1.0);
    assert_relative_eq!(trace[0][1], 0.0);
    assert_relative_eq!(trace[199][1], 0.0, epsilon = 1e-12);
    assert!(trace[199][0] > trace[0][0]);
}
