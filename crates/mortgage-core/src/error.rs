use thiserror::Error;

/// Errors raised by the repayment engine.
///
/// Every operation is pure and deterministic, so there is no retryable
/// class: the same inputs always either succeed or fail identically.
#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("Invalid parameter: {field} — {reason}")]
    InvalidParameter { field: String, reason: String },
}
