//! Driven port for deriving and checking stored credentials.
//!
//! Implementations must use a slow, salted, one-way derivation designed for
//! password storage, draw a fresh salt on every `hash` call, and compare
//! digests in constant time inside `verify`. The interface is synchronous
//! because derivation is CPU-bound; callers move it off async workers.

use crate::domain::{Password, PasswordHash};

/// Errors raised while deriving a stored credential.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialHashError {
    /// The entropy source could not supply a salt.
    #[error("salt generation failed: {message}")]
    Entropy { message: String },
    /// The derivation function rejected its inputs or parameters.
    #[error("credential derivation failed: {message}")]
    Derivation { message: String },
}

impl CredentialHashError {
    pub fn entropy(message: impl Into<String>) -> Self {
        Self::Entropy {
            message: message.into(),
        }
    }

    pub fn derivation(message: impl Into<String>) -> Self {
        Self::Derivation {
            message: message.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Derive a stored credential from a plaintext password.
    fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialHashError>;

    /// Check a plaintext candidate against a stored credential.
    ///
    /// Malformed stored values never match.
    fn verify(&self, stored: &PasswordHash, candidate: &str) -> bool;
}
