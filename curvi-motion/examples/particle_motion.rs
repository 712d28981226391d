//! Walks through a classic particle-motion problem.
//!
//! A particle moves along a plane curve for `0 <= t <= pi` with
//! `dx/dt = e^{cos t}`, `y(t) = 2 sin t`, starting at (1, 0). Every number
//! printed here is derived from the numeric evaluators at run time.

use std::f64::consts::{FRAC_PI_2, PI};

use curvi_core::Interval;
use curvi_motion::PlanarMotion;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let motion = PlanarMotion::new(
        1.0,
        |t: f64| t.cos().exp(),
        |t: f64| 2.0 * t.sin(),
        |t: f64| 2.0 * t.cos(),
    );

    let [ax, ay] = motion.acceleration(1.0)?;
    println!("acceleration at t = 1:     <{ax:.3}, {ay:.3}>");

    let crossing = motion.time_at_speed(1.5, [0.0, FRAC_PI_2])?;
    println!("speed reaches 1.5 at t =   {crossing:.3}");

    let slope = motion.tangent_slope(1.0)?;
    let position = motion.position(1.0)?;
    println!("tangent slope at t = 1:    {slope:.3}");
    println!("x-coordinate at t = 1:     {:.3}", position.x);

    let span = Interval::new(0.0, PI)?;
    let distance = motion.arclength(span)?;
    println!("distance over [0, pi]:     {distance:.3}");

    // Points ready to hand to a plotting backend.
    let trace = motion.sample_xy(span, 100)?;
    println!("traced {} points along the curve", trace.len());

    Ok(())
}
