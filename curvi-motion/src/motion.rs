use curvi_core::{CurvePoint, Interval, ParametricCurve};
use curvi_solve::{derivative, quadrature, root};

use crate::Error;

/// A particle moving along a plane curve, starting at `t = 0`.
///
/// The motion is described entirely by explicit parameters: the horizontal
/// rate `dx/dt`, the closed-form ordinate `y(t)` and its rate `dy/dt`, and
/// the initial abscissa `x(0) = x0`. All three functions are ordinary
/// closures; points where a function misbehaves surface as non-finite-sample
/// errors from the underlying numeric routines.
pub struct PlanarMotion<Dx, Y, Dy> {
    dx_dt: Dx,
    y: Y,
    dy_dt: Dy,
    x0: f64,
    quadrature: quadrature::Config,
    derivative: derivative::Config,
    root: root::Config,
}

impl<Dx, Y, Dy> PlanarMotion<Dx, Y, Dy>
where
    Dx: Fn(f64) -> f64,
    Y: Fn(f64) -> f64,
    Dy: Fn(f64) -> f64,
{
    /// Describes a particle by its initial abscissa and rate functions.
    pub fn new(x0: f64, dx_dt: Dx, y: Y, dy_dt: Dy) -> Self {
        Self {
            dx_dt,
            y,
            dy_dt,
            x0,
            quadrature: quadrature::Config::default(),
            derivative: derivative::Config::default(),
            root: root::Config::default(),
        }
    }

    /// Replaces the quadrature configuration.
    #[must_use]
    pub fn with_quadrature(mut self, config: quadrature::Config) -> Self {
        self.quadrature = config;
        self
    }

    /// Replaces the finite-difference configuration.
    #[must_use]
    pub fn with_derivative(mut self, config: derivative::Config) -> Self {
        self.derivative = config;
        self
    }

    /// Replaces the root-finding configuration.
    #[must_use]
    pub fn with_root(mut self, config: root::Config) -> Self {
        self.root = config;
        self
    }

    /// Position of the particle at time `t`.
    ///
    /// The abscissa is `x0` plus the definite integral of `dx/dt` from 0 to
    /// `t`; the ordinate comes directly from the closed form, so it is exact.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is negative or integration fails.
    pub fn position(&self, t: f64) -> Result<CurvePoint, Error> {
        let span = self.time_span(t)?;
        let x = self.x0
            + quadrature::integrate_unobserved(&self.dx_dt, span, &self.quadrature)?.value;
        Ok(CurvePoint::planar(t, x, (self.y)(t)))
    }

    /// Velocity vector `(dx/dt, dy/dt)` at time `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is negative.
    pub fn velocity(&self, t: f64) -> Result<[f64; 2], Error> {
        self.check_time(t)?;
        Ok([(self.dx_dt)(t), (self.dy_dt)(t)])
    }

    /// Magnitude of the velocity vector at time `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is negative.
    pub fn speed(&self, t: f64) -> Result<f64, Error> {
        let [vx, vy] = self.velocity(t)?;
        Ok(vx.hypot(vy))
    }

    /// Acceleration vector `(x''(t), y''(t))` at time `t`, obtained by
    /// differentiating the rate functions numerically.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is negative or differentiation fails.
    pub fn acceleration(&self, t: f64) -> Result<[f64; 2], Error> {
        self.check_time(t)?;
        let ax = derivative::first(&self.dx_dt, t, &self.derivative)?;
        let ay = derivative::first(&self.dy_dt, t, &self.derivative)?;
        Ok([ax, ay])
    }

    /// Slope `dy/dx` of the tangent line at time `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is negative or the tangent is vertical
    /// (`dx/dt` is zero there).
    pub fn tangent_slope(&self, t: f64) -> Result<f64, Error> {
        let [vx, vy] = self.velocity(t)?;
        if vx == 0.0 {
            return Err(Error::VerticalTangent { t });
        }
        Ok(vy / vx)
    }

    /// Distance traveled over `interval`, the integral of speed.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval starts before `t = 0` or integration
    /// fails.
    pub fn arclength(&self, interval: Interval) -> Result<f64, Error> {
        self.check_time(interval.a())?;
        let speed = |t: f64| (self.dx_dt)(t).hypot((self.dy_dt)(t));
        Ok(quadrature::integrate_unobserved(&speed, interval, &self.quadrature)?.value)
    }

    /// Time within `bracket` at which the particle's speed equals `target`.
    ///
    /// Bisection needs a bracket containing exactly one crossing; to find the
    /// first time a speed is reached, bracket the first crossing.
    ///
    /// # Errors
    ///
    /// Returns an error if the bracket does not contain a crossing or the
    /// root search fails.
    pub fn time_at_speed(&self, target: f64, bracket: [f64; 2]) -> Result<f64, Error> {
        let residual = |t: f64| (self.dx_dt)(t).hypot((self.dy_dt)(t)) - target;
        let solution = root::bisect_unobserved(&residual, bracket, &self.root)?;
        Ok(solution.t)
    }

    /// Samples `n` evenly spaced points over `interval`.
    ///
    /// The abscissa is accumulated segment by segment rather than integrated
    /// from 0 for every point, so fine traces stay cheap.
    ///
    /// # Errors
    ///
    /// Returns an error if `n < 2`, the interval starts before `t = 0`, or
    /// integration fails.
    pub fn sample(&self, interval: Interval, n: usize) -> Result<Vec<CurvePoint>, Error> {
        if n < 2 {
            return Err(Error::TooFewSamples { n });
        }
        self.check_time(interval.a())?;

        let step = interval.width() / (n - 1) as f64;
        let mut x = self.position(interval.a())?.x;
        let mut points = Vec::with_capacity(n);
        let mut previous = interval.a();

        for i in 0..n {
            let t = interval.a() + step * i as f64;
            if i > 0 {
                let segment = self.segment(previous, t)?;
                x += quadrature::integrate_unobserved(&self.dx_dt, segment, &self.quadrature)?
                    .value;
            }
            points.push(CurvePoint::planar(t, x, (self.y)(t)));
            previous = t;
        }

        Ok(points)
    }

    /// Samples the curve as `[x, y]` pairs, the shape plotting backends take.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`sample`](Self::sample).
    pub fn sample_xy(&self, interval: Interval, n: usize) -> Result<Vec<[f64; 2]>, Error> {
        Ok(self.sample(interval, n)?.iter().map(CurvePoint::xy).collect())
    }

    fn check_time(&self, t: f64) -> Result<(), Error> {
        if t.is_finite() && t >= 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidTime { t })
        }
    }

    fn time_span(&self, t: f64) -> Result<Interval, Error> {
        self.check_time(t)?;
        self.segment(0.0, t)
    }

    fn segment(&self, a: f64, b: f64) -> Result<Interval, Error> {
        Interval::new(a, b).map_err(|e| Error::Quadrature(quadrature::Error::Interval(e)))
    }
}

impl<Dx, Y, Dy> ParametricCurve for PlanarMotion<Dx, Y, Dy>
where
    Dx: Fn(f64) -> f64,
    Y: Fn(f64) -> f64,
    Dy: Fn(f64) -> f64,
{
    type Error = Error;

    fn point_at(&self, t: f64) -> Result<CurvePoint, Error> {
        self.position(t)
    }
}
