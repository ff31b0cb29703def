//! Process-local `AccountRepository` used when no database is configured.
//!
//! All state sits behind one mutex, so the uniqueness check and the insert
//! happen atomically and concurrent duplicates resolve to exactly one winner.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{AccountPersistenceError, AccountRepository, UniqueField};
use crate::domain::{Account, AccountId, NewAccount};

#[derive(Debug, Default)]
struct Ledger {
    last_id: i64,
    usernames: HashSet<String>,
    emails: HashSet<String>,
}

/// In-memory account store with database-like uniqueness semantics.
///
/// Identifiers start at 1 and increase monotonically. Usernames are checked
/// before emails, matching the order a relational store reports them.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    ledger: Mutex<Ledger>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .usernames
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &NewAccount) -> Result<Account, AccountPersistenceError> {
        let mut ledger = self
            .ledger
            .lock()
            .map_err(|_| AccountPersistenceError::query("account store lock poisoned"))?;

        if ledger.usernames.contains(account.username().as_ref()) {
            return Err(AccountPersistenceError::unique_violation(
                UniqueField::Username,
            ));
        }
        if ledger.emails.contains(account.email().as_ref()) {
            return Err(AccountPersistenceError::unique_violation(UniqueField::Email));
        }

        ledger.last_id += 1;
        let id = AccountId::new(ledger.last_id);
        ledger.usernames.insert(account.username().to_string());
        ledger.emails.insert(account.email().to_string());

        Ok(account.clone().into_account(id, Utc::now()))
    }
}
