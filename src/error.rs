#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when an optimizer or sequence is built with zero dimensions.
    #[error("dimension must be at least 1")]
    ZeroDimension,

    /// Returned when a budget-fixed feature is requested without a finite budget.
    #[error("{what} requires a finite budget, but none was provided")]
    BudgetRequired {
        /// The feature that needs the budget up front.
        what: &'static str,
    },

    /// Returned when the auto scale policy is used with budget or dimension <= 1.
    #[error(
        "auto scale requires budget > 1 and dimension > 1 (budget: {budget:?}, dimension: {dimension})"
    )]
    AutoScaleUnsupported {
        /// The configured total budget, if any.
        budget: Option<usize>,
        /// The search-space dimension.
        dimension: usize,
    },

    /// Returned when a fixed scale is negative or not finite.
    #[error("invalid fixed scale {0}: must be finite and non-negative")]
    InvalidScale(f64),

    /// Returned when a budget-fixed sequence is asked for more points than it holds.
    #[error("sequence exhausted: all {budget} points have already been drawn")]
    SequenceExhausted {
        /// The number of points the sequence was built for.
        budget: usize,
    },

    /// Returned when a told point has the wrong number of coordinates.
    #[error("dimension mismatch: expected {expected} coordinates, got {got}")]
    DimensionMismatch {
        /// The optimizer's dimension.
        expected: usize,
        /// The length of the offending point.
        got: usize,
    },

    /// Returned when a recommendation is requested before any point was told.
    #[error("recommendation requested against an empty archive")]
    EmptyArchive,
}

pub type Result<T> = core::result::Result<T, Error>;
