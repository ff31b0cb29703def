//! Classification of persistence failures into uniqueness conflicts.
//!
//! Adapters that can identify the violated constraint report
//! [`AccountPersistenceError::UniqueViolation`]. Matching on message text is
//! a degraded fallback for adapters that cannot: it depends on store wording,
//! letter case and locale, and can be switched off.

use crate::domain::ports::{AccountPersistenceError, UniqueField};

/// What a persistence failure means for a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictOutcome {
    NoConflict,
    UsernameConflict,
    EmailConflict,
    UnknownPersistenceError,
}

impl From<UniqueField> for ConflictOutcome {
    fn from(field: UniqueField) -> Self {
        match field {
            UniqueField::Username => Self::UsernameConflict,
            UniqueField::Email => Self::EmailConflict,
        }
    }
}

/// Stateless classifier configured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictClassifier {
    text_fallback: bool,
}

impl Default for ConflictClassifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConflictClassifier {
    /// Create a classifier; `text_fallback` enables message matching for
    /// unstructured query failures.
    #[must_use]
    pub const fn new(text_fallback: bool) -> Self {
        Self { text_fallback }
    }

    /// Classify an optional persistence failure.
    ///
    /// # Examples
    /// ```
    /// use signup::domain::ports::{AccountPersistenceError, UniqueField};
    /// use signup::domain::{ConflictClassifier, ConflictOutcome};
    ///
    /// let classifier = ConflictClassifier::default();
    /// let failure = AccountPersistenceError::unique_violation(UniqueField::Email);
    /// assert_eq!(classifier.classify(Some(&failure)), ConflictOutcome::EmailConflict);
    /// assert_eq!(classifier.classify(None), ConflictOutcome::NoConflict);
    /// ```
    #[must_use]
    pub fn classify(&self, failure: Option<&AccountPersistenceError>) -> ConflictOutcome {
        match failure {
            None => ConflictOutcome::NoConflict,
            Some(AccountPersistenceError::UniqueViolation { field }) => (*field).into(),
            Some(AccountPersistenceError::Query { message }) if self.text_fallback => {
                classify_message(message)
            }
            Some(_) => ConflictOutcome::UnknownPersistenceError,
        }
    }
}

fn classify_message(message: &str) -> ConflictOutcome {
    let lower = message.to_lowercase();
    if !lower.contains("unique") {
        return ConflictOutcome::UnknownPersistenceError;
    }
    if lower.contains(UniqueField::Username.as_str()) {
        ConflictOutcome::UsernameConflict
    } else if lower.contains(UniqueField::Email.as_str()) {
        ConflictOutcome::EmailConflict
    } else {
        ConflictOutcome::UnknownPersistenceError
    }
}
