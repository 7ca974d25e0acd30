pub mod analysis;
pub mod error;
pub mod frequency;
pub mod payment;
pub mod prepayment;
pub mod schedule;
pub mod types;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all engine operations
pub type MortgageResult<T> = Result<T, MortgageError>;
