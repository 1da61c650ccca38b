//! Result type aliases for Satchel.

use crate::SatchelError;

/// A specialized `Result` type for Satchel operations.
pub type SatchelResult<T> = Result<T, SatchelError>;
