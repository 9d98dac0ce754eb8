pub mod assumptions;
pub mod error;
pub mod expenses;
pub mod metrics;
pub mod projection;
pub mod types;

pub use error::UnderwriteError;
pub use types::*;

/// Standard result type for all underwriting operations
pub type UnderwriteResult<T> = Result<T, UnderwriteError>;
