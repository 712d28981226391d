/// Configuration for the adaptive quadrature routine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Absolute error budget for the whole interval.
    pub tolerance: f64,
    /// Maximum subdivision depth before refinement gives up.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            max_depth: 40,
        }
    }
}

impl Config {
    /// Validates the tolerance and depth budget.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite or not positive.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        Ok(())
    }
}
