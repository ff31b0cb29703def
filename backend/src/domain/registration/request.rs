//! Decoded registration payload, before any semantic checks.

use std::fmt;

use zeroize::Zeroizing;

/// Raw registration input as decoded by an inbound adapter.
///
/// Carries no invariants beyond structure; see
/// [`validate`](super::validation::validate) for the rules.
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: Zeroizing<String>,
    pub bio: Option<String>,
}

impl RegistrationRequest {
    /// Build a request from its parts.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        bio: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
            bio,
        }
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("bio", &self.bio)
            .finish()
    }
}
