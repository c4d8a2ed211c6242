pub mod dates;
pub mod engine;
pub mod error;
pub mod format;
pub mod store;
pub mod types;
pub mod validator;

pub use error::DecreeError;
pub use types::*;

/// Standard result type for all decree operations
pub type DecreeResult<T> = Result<T, DecreeError>;
