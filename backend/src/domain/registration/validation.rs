//! Registration input rules.
//!
//! Rules run in a fixed order and the first failure wins:
//! username present, username length, email present, email syntax,
//! password present.

use crate::domain::{AccountValidationError, EmailAddress, Password, Username};

use super::request::RegistrationRequest;

/// Registration input that passed every rule.
#[derive(Debug)]
pub struct ValidatedRegistration {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
    pub bio: Option<String>,
}

/// Apply the registration rules to a decoded request.
///
/// # Examples
/// ```
/// use signup::domain::{validate, AccountValidationError, RegistrationRequest};
///
/// let request = RegistrationRequest::new("alice", "alice@example", "pw", None);
/// assert_eq!(
///     validate(request).unwrap_err(),
///     AccountValidationError::InvalidEmail
/// );
/// ```
pub fn validate(
    request: RegistrationRequest,
) -> Result<ValidatedRegistration, AccountValidationError> {
    let RegistrationRequest {
        username,
        email,
        password,
        bio,
    } = request;

    let username = Username::new(username)?;
    let email = EmailAddress::new(email)?;
    let password = Password::new(password.as_str())?;

    Ok(ValidatedRegistration {
        username,
        email,
        password,
        bio,
    })
}
