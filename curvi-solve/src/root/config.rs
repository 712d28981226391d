/// Configuration for the bisection solver.
///
/// The solver stops when the bracket narrows to
/// `t_abs_tol + t_rel_tol * |midpoint|` or the midpoint residual falls
/// within `residual_tol`, whichever happens first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Iteration budget; past it the best midpoint seen is reported.
    pub max_iters: usize,
    /// Absolute tolerance on the bracket width.
    pub t_abs_tol: f64,
    /// Relative tolerance on the bracket width.
    pub t_rel_tol: f64,
    /// Residual magnitude accepted as a root.
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            t_abs_tol: 1e-12,
            t_rel_tol: 1e-12,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Checks every tolerance for a usable value.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first tolerance that is negative or
    /// non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        let checks = [
            (self.t_abs_tol, "t_abs_tol must be finite and non-negative"),
            (self.t_rel_tol, "t_rel_tol must be finite and non-negative"),
            (
                self.residual_tol,
                "residual_tol must be finite and non-negative",
            ),
        ];
        for (value, reason) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(reason);
            }
        }
        Ok(())
    }
}
