use crate::CurvePoint;

/// A curve parameterized by a real number.
///
/// This is the only contract a rendering or plotting layer needs: given a
/// parameter value, produce the point on the curve. Implementations must be
/// deterministic and free of side effects.
pub trait ParametricCurve {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the point on the curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be evaluated at `t`, for example
    /// when an underlying numeric routine fails to converge.
    fn point_at(&self, t: f64) -> Result<CurvePoint, Self::Error>;
}
