//! Account data model.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::credential::PasswordHash;

/// Maximum username length, counted in Unicode code points.
pub const USERNAME_MAX: usize = 50;

/// Validation errors raised while building account fields from raw input.
///
/// The `Display` text is the client-facing reason for the rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyUsername,
    UsernameTooLong { max: usize },
    EmptyEmail,
    InvalidEmail,
    EmptyPassword,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username is required"),
            Self::UsernameTooLong { max } => {
                write!(f, "username cannot be greater than {max} characters")
            }
            Self::EmptyEmail => write!(f, "email is required"),
            Self::InvalidEmail => write!(f, "invalid email format"),
            Self::EmptyPassword => write!(f, "password is required"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

/// Unique account name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    ///
    /// Whitespace is preserved; only emptiness and length are checked.
    pub fn new(username: impl Into<String>) -> Result<Self, AccountValidationError> {
        let username = username.into();
        if username.is_empty() {
            return Err(AccountValidationError::EmptyUsername);
        }
        if username.chars().count() > USERNAME_MAX {
            return Err(AccountValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Both letter cases are spelled out so matching stays ASCII-only.
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid, unique email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, AccountValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(AccountValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(AccountValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Store-assigned account key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Wrap a raw key produced by a persistence adapter.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw key value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Candidate account built after validation and hashing, before the store
/// assigns an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    username: Username,
    email: EmailAddress,
    bio: Option<String>,
    credential: PasswordHash,
}

impl NewAccount {
    /// Assemble a candidate account. An empty bio is treated as absent.
    #[must_use]
    pub fn new(
        username: Username,
        email: EmailAddress,
        bio: Option<String>,
        credential: PasswordHash,
    ) -> Self {
        Self {
            username,
            email,
            bio: bio.filter(|bio| !bio.is_empty()),
            credential,
        }
    }

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    #[must_use]
    pub fn credential(&self) -> &PasswordHash {
        &self.credential
    }

    /// Attach the identity and timestamp the store assigned on insert.
    #[must_use]
    pub fn into_account(self, id: AccountId, created_at: DateTime<Utc>) -> Account {
        let Self {
            username,
            email,
            bio,
            credential,
        } = self;
        Account {
            id,
            username,
            email,
            bio,
            credential,
            created_at,
        }
    }
}

/// Persisted account.
///
/// ## Invariants
/// - `username` is non-empty and at most [`USERNAME_MAX`] code points.
/// - `email` matches the accepted address syntax.
/// - `bio` is never `Some("")`.
/// - `credential` is a one-way derived secret and is never serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[schema(value_type = i64, example = 1)]
    id: AccountId,
    #[schema(value_type = String, example = "alice")]
    username: Username,
    #[schema(value_type = String, example = "alice@example.com")]
    email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Runs before breakfast")]
    bio: Option<String>,
    #[serde(skip)]
    credential: PasswordHash,
    created_at: DateTime<Utc>,
}

impl Account {
    #[must_use]
    pub fn id(&self) -> AccountId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Stored credential, for collaborators that verify passwords.
    #[must_use]
    pub fn credential(&self) -> &PasswordHash {
        &self.credential
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
