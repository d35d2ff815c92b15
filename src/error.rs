//! Generation errors.

use thiserror::Error;

/// Rejected generation request. Raised before any randomness is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Valid length, but no buffer that large can be allocated.
    #[error("cannot allocate a password of length {0}")]
    LengthTooLarge(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
