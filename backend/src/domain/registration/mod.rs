//! Account registration use-case.
//!
//! - [`validate`] enforces the ordered input rules.
//! - [`ConflictClassifier`] turns persistence failures into conflict outcomes.
//! - [`RegistrationService`] sequences validation, hashing and persistence.

mod conflict;
mod error;
mod request;
mod service;
mod validation;

pub use conflict::{ConflictClassifier, ConflictOutcome};
pub use error::RegistrationError;
pub use request::RegistrationRequest;
pub use service::RegistrationService;
pub use validation::{ValidatedRegistration, validate};
