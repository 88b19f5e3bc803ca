pub mod analysis;
pub mod error;
pub mod payoff;
pub mod schedule;
pub mod summary;
pub mod types;

pub use error::LoanEngineError;
pub use types::*;

/// Standard result type for all loan-engine operations
pub type LoanEngineResult<T> = Result<T, LoanEngineError>;
