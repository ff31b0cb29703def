//! Driving port for the account registration use-case.
//!
//! Inbound adapters call this port with a decoded request and translate the
//! outcome into their own envelope. HTTP handler tests substitute a test
//! double instead of wiring hashing and persistence.

use async_trait::async_trait;

use crate::domain::{Account, RegistrationError, RegistrationRequest};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRegistration: Send + Sync {
    /// Validate, hash and persist a new account.
    async fn register(&self, request: RegistrationRequest) -> Result<Account, RegistrationError>;
}
