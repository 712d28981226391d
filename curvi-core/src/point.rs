/// A sampled point on a parametric curve.
///
/// Plane curves carry `z = 0`; the third coordinate exists so samples can be
/// handed directly to plotting backends that expect 3-component points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CurvePoint {
    /// Parameter value the point was sampled at.
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CurvePoint {
    /// Creates a point on a plane curve (`z = 0`).
    #[must_use]
    pub fn planar(t: f64, x: f64, y: f64) -> Self {
        Self { t, x, y, z: 0.0 }
    }

    /// The point as an `[x, y]` pair, the shape 2-D plot series expect.
    #[must_use]
    pub fn xy(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[must_use]
    pub fn xyz(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
