//! Password material: the plaintext supplied at registration and the
//! one-way derived secret that is stored.
//!
//! Neither type prints its contents through `Debug`.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::account::AccountValidationError;

/// Plaintext password held only for the duration of a request.
///
/// The buffer is wiped on drop. No strength policy is applied beyond
/// presence.
pub struct Password(Zeroizing<String>);

impl Password {
    /// Construct a password, rejecting empty input.
    pub fn new(password: impl Into<String>) -> Result<Self, AccountValidationError> {
        let password = Zeroizing::new(password.into());
        if password.is_empty() {
            return Err(AccountValidationError::EmptyPassword);
        }
        Ok(Self(password))
    }

    /// Plaintext for handing to a credential hasher.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Stored credential in PHC string format
/// (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<digest>`).
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded PHC string produced by a hasher or read from storage.
    pub fn from_phc(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded PHC string.
    #[must_use]
    pub fn as_phc(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_password_is_rejected() {
        let err = Password::new("").expect_err("empty password must fail");
        assert_eq!(err, AccountValidationError::EmptyPassword);
    }

    #[rstest]
    #[case(" ")]
    #[case("s3cret")]
    fn any_non_empty_password_is_accepted(#[case] raw: &str) {
        let password = Password::new(raw).expect("non-empty password");
        assert_eq!(password.expose(), raw);
    }

    #[rstest]
    fn debug_output_is_redacted() {
        let password = Password::new("hunter2").expect("password");
        let hash = PasswordHash::from_phc("$argon2id$v=19$secret");
        assert!(!format!("{password:?}").contains("hunter2"));
        assert!(!format!("{hash:?}").contains("secret"));
    }
}
