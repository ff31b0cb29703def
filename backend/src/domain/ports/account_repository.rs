//! Port abstraction for account persistence adapters and their errors.
//!
//! Adapters must enforce username and email uniqueness atomically at write
//! time. The domain never pre-checks for duplicates; it relies on the
//! structured [`AccountPersistenceError::UniqueViolation`] signal instead.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{Account, NewAccount};

/// Account fields declared unique by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueField {
    Username,
    Email,
}

impl UniqueField {
    /// Column name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence errors raised by account repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountPersistenceError {
    /// A unique constraint rejected the insert; the adapter identified which.
    #[error("account {field} violates a unique constraint")]
    UniqueViolation { field: UniqueField },
    /// Repository connection could not be established.
    #[error("account repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("account repository query failed: {message}")]
    Query { message: String },
}

impl AccountPersistenceError {
    pub fn unique_violation(field: UniqueField) -> Self {
        Self::UniqueViolation { field }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account and return it with its store-assigned identity.
    async fn create(&self, account: &NewAccount) -> Result<Account, AccountPersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UniqueField::Username, "username")]
    #[case(UniqueField::Email, "email")]
    fn unique_fields_render_as_column_names(#[case] field: UniqueField, #[case] name: &str) {
        assert_eq!(field.to_string(), name);
        assert!(
            AccountPersistenceError::unique_violation(field)
                .to_string()
                .contains(name)
        );
    }

    #[rstest]
    fn message_constructors_keep_driver_text() {
        assert_eq!(
            AccountPersistenceError::connection("refused"),
            AccountPersistenceError::Connection {
                message: "refused".to_owned()
            }
        );
        assert!(
            AccountPersistenceError::query("syntax error")
                .to_string()
                .ends_with("syntax error")
        );
    }
}
