//! Domain service orchestrating account registration.
//!
//! One call walks a single request through validation, credential
//! derivation and persistence. Every failure is terminal and surfaced
//! immediately; nothing is retried and the store is never pre-queried for
//! duplicates.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{
    AccountPersistenceError, AccountRegistration, AccountRepository, CredentialHasher,
};
use crate::domain::{Account, NewAccount, Password, PasswordHash};

use super::conflict::{ConflictClassifier, ConflictOutcome};
use super::error::RegistrationError;
use super::request::RegistrationRequest;
use super::validation::{ValidatedRegistration, validate};

/// Registration use-case backed by a credential hasher and an account store.
#[derive(Clone)]
pub struct RegistrationService {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn CredentialHasher>,
    classifier: ConflictClassifier,
}

impl RegistrationService {
    /// Create a service using the default conflict classifier.
    pub fn new(accounts: Arc<dyn AccountRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self {
            accounts,
            hasher,
            classifier: ConflictClassifier::default(),
        }
    }

    /// Replace the conflict classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: ConflictClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Derive the stored credential on the blocking pool.
    async fn derive_credential(&self, password: Password) -> Result<PasswordHash, RegistrationError> {
        let hasher = Arc::clone(&self.hasher);
        match tokio::task::spawn_blocking(move || hasher.hash(&password)).await {
            Ok(Ok(credential)) => Ok(credential),
            Ok(Err(err)) => {
                error!(error = %err, "credential hashing failed");
                Err(RegistrationError::InternalFailure)
            }
            Err(err) => {
                error!(error = %err, "credential hashing task did not complete");
                Err(RegistrationError::InternalFailure)
            }
        }
    }

    fn map_persistence_error(&self, err: &AccountPersistenceError) -> RegistrationError {
        match self.classifier.classify(Some(err)) {
            ConflictOutcome::UsernameConflict => {
                info!(error = %err, "registration rejected: username taken");
                RegistrationError::UsernameTaken
            }
            ConflictOutcome::EmailConflict => {
                info!(error = %err, "registration rejected: email taken");
                RegistrationError::EmailTaken
            }
            ConflictOutcome::NoConflict | ConflictOutcome::UnknownPersistenceError => {
                error!(error = %err, "registering account failed");
                RegistrationError::InternalFailure
            }
        }
    }
}

#[async_trait]
impl AccountRegistration for RegistrationService {
    async fn register(&self, request: RegistrationRequest) -> Result<Account, RegistrationError> {
        let ValidatedRegistration {
            username,
            email,
            password,
            bio,
        } = validate(request).map_err(|err| {
            debug!(reason = %err, "registration input rejected");
            RegistrationError::InvalidInput(err)
        })?;

        let credential = self.derive_credential(password).await?;
        let candidate = NewAccount::new(username, email, bio, credential);

        let account = self
            .accounts
            .create(&candidate)
            .await
            .map_err(|err| self.map_persistence_error(&err))?;

        info!(account_id = %account.id(), "account registered");
        Ok(account)
    }
}
