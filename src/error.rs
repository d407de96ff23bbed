//! Error type shared by every layer of the crate
use crate::isogeny::Party;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SikeError {
    #[error("invalid {what} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A decoded integer was not reduced modulo p
    #[error("non-canonical encoding of {0}")]
    NonCanonical(&'static str),

    /// Square root of a non-residue, or similar undefined field operation
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    #[error("private key scalar out of range for {party}")]
    KeyOutOfRange { party: Party },

    #[error("key belongs to {actual}, expected {expected}")]
    PartyMismatch { expected: Party, actual: Party },

    #[error("invalid parameter set: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, SikeError>;
