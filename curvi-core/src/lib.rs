mod curve;
mod integrand;
mod interval;
mod point;

pub use curve::ParametricCurve;
pub use integrand::Integrand;
pub use interval::{Interval, IntervalError};
pub use point::CurvePoint;
