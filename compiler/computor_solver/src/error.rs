use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The square root was asked for a negative number.
    #[error("Cannot calculate sqrt of negative number")]
    NegativeSqrt(f64),
}
