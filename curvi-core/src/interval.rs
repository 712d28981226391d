use thiserror::Error;

/// A validated closed interval `[a, b]`.
///
/// Both bounds are finite and `a <= b`. The invariant is checked once at
/// construction, so numeric routines that take an `Interval` can rely on it
/// without re-validating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

/// An error returned when an [`Interval`] cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntervalError {
    #[error("interval bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("interval bounds are reversed: [{a}, {b}]")]
    ReversedBounds { a: f64, b: f64 },
}

impl Interval {
    /// Constructs the interval `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or if `a > b`.
    pub fn new(a: f64, b: f64) -> Result<Self, IntervalError> {
        if !a.is_finite() {
            return Err(IntervalError::NonFiniteBound { value: a });
        }
        if !b.is_finite() {
            return Err(IntervalError::NonFiniteBound { value: b });
        }
        if a > b {
            return Err(IntervalError::ReversedBounds { a, b });
        }
        Ok(Self { a, b })
    }

    /// Lower bound.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper bound.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// Whether the interval has zero width.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.a && t <= self.b
    }

    /// Splits the interval at its midpoint.
    #[must_use]
    pub fn halves(&self) -> (Self, Self) {
        let mid = self.midpoint();
        (Self { a: self.a, b: mid }, Self { a: mid, b: self.b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn constructs_and_measures() {
        let interval = Interval::new(-1.0, 3.0).unwrap();

        assert_relative_eq!(interval.width(), 4.0);
        assert_relative_eq!(interval.midpoint(), 1.0);
        assert!(interval.contains(0.0));
        assert!(!interval.contains(3.5));
        assert!(!interval.is_degenerate());
    }

    #[test]
    fn degenerate_interval_is_allowed() {
        let interval = Interval::new(2.0, 2.0).unwrap();

        assert!(interval.is_degenerate());
        assert_relative_eq!(interval.width(), 0.0);
    }

    #[test]
    fn halves_share_the_midpoint() {
        let interval = Interval::new(0.0, 8.0).unwrap();
        let (left, right) = interval.halves();

        assert_relative_eq!(left.b(), 4.0);
        assert_relative_eq!(right.a(), 4.0);
        assert_relative_eq!(left.width() + right.width(), interval.width());
    }

    #[test]
    fn rejects_reversed_bounds() {
        let result = Interval::new(1.0, 0.0);

        assert!(matches!(result, Err(IntervalError::ReversedBounds { .. })));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let result = Interval::new(f64::NAN, 1.0);
        assert!(matches!(result, Err(IntervalError::NonFiniteBound { .. })));

        let result = Interval::new(0.0, f64::INFINITY);
        assert!(matches!(result, Err(IntervalError::NonFiniteBound { .. })));
    }
}
