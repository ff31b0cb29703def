//! Domain primitives, ports and the registration use-case.
//!
//! Purpose: define strongly typed account entities and the registration
//! pipeline independently of HTTP and storage. Adapters live under
//! `inbound` and `outbound` and depend on this module, never the reverse.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Account, NewAccount and their field newtypes.
//! - Password / PasswordHash: plaintext and stored credential.
//! - RegistrationService and its supporting validator and classifier.

pub mod account;
pub mod credential;
pub mod error;
pub mod ports;
pub mod registration;

pub use self::account::{
    Account, AccountId, AccountValidationError, EmailAddress, NewAccount, USERNAME_MAX, Username,
};
pub use self::credential::{Password, PasswordHash};
pub use self::error::{Error, ErrorCode};
pub use self::registration::{
    ConflictClassifier, ConflictOutcome, RegistrationError, RegistrationRequest,
    RegistrationService, ValidatedRegistration, validate,
};
