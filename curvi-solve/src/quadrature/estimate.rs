/// Indicates how the quadrature routine finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every subinterval met its share of the error budget.
    Converged,
    /// Refinement was stopped early by an observer; the estimate covers only
    /// the subintervals accepted so far.
    StoppedByObserver,
}

/// An estimate of a definite integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Estimated value of the integral.
    pub value: f64,
    /// Estimated absolute error bound on `value`.
    pub error: f64,
    /// Number of accepted subintervals.
    pub intervals: usize,
    /// Final routine status.
    pub status: Status,
}
