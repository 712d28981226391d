//! Kinematics of a particle moving along a parametric plane curve.
//!
//! A [`PlanarMotion`] describes the particle by its horizontal rate `dx/dt`,
//! the closed-form ordinate `y(t)` and its rate `dy/dt`, and the initial
//! abscissa `x(0)`. The abscissa at later times is recovered by definite
//! integration of `dx/dt`; speed, acceleration, tangent slope, and distance
//! traveled all follow from the same three functions.

mod error;
mod motion;

pub use error::Error;
pub use motion::PlanarMotion;
