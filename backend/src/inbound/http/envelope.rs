//! JSON envelopes wrapping every registration response.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Account;

/// Failure body: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    #[schema(example = "username already exists")]
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Success body: `{"user": {...}}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountEnvelope {
    pub user: Account,
}

impl From<Account> for AccountEnvelope {
    fn from(user: Account) -> Self {
        Self { user }
    }
}
