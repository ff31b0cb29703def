//! Terminal failures of a registration attempt.

use crate::domain::AccountValidationError;

/// Failure taxonomy for registration.
///
/// `Display` yields the client-facing message. Internal detail never appears
/// here; it is logged where the failure happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The request body could not be decoded.
    #[error("invalid request payload")]
    BadPayload,
    /// A validation rule rejected the input.
    #[error(transparent)]
    InvalidInput(#[from] AccountValidationError),
    #[error("username already exists")]
    UsernameTaken,
    #[error("email already exists")]
    EmailTaken,
    /// Hashing failed or the store failed for a reason other than a
    /// recognised uniqueness conflict.
    #[error("internal server error")]
    InternalFailure,
}
