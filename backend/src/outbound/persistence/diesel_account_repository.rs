//! PostgreSQL-backed `AccountRepository` using Diesel.
//!
//! Uniqueness is enforced by the `accounts_username_key` and
//! `accounts_email_key` constraints. A violation of either is reported as a
//! structured [`AccountPersistenceError::UniqueViolation`].

use async_trait::async_trait;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{AccountPersistenceError, AccountRepository, UniqueField};
use crate::domain::{Account, AccountId, NewAccount};

use super::models::{InsertedAccountRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

const USERNAME_CONSTRAINT: &str = "accounts_username_key";
const EMAIL_CONSTRAINT: &str = "accounts_email_key";

/// Diesel implementation of the [`AccountRepository`] port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountPersistenceError {
    AccountPersistenceError::connection(error.message())
}

fn unique_field_for(constraint: Option<&str>) -> Option<UniqueField> {
    match constraint? {
        USERNAME_CONSTRAINT => Some(UniqueField::Username),
        EMAIL_CONSTRAINT => Some(UniqueField::Email),
        _ => None,
    }
}

fn map_unique_violation(
    info: &(dyn DatabaseErrorInformation + Send + Sync),
) -> AccountPersistenceError {
    if let Some(field) = unique_field_for(info.constraint_name()) {
        return AccountPersistenceError::unique_violation(field);
    }
    warn!(
        constraint = ?info.constraint_name(),
        "unique violation on an unrecognised constraint"
    );
    // Keep the driver text so the message-based classifier can still decide.
    AccountPersistenceError::query(info.message())
}

fn map_diesel_error(error: DieselError) -> AccountPersistenceError {
    if let DieselError::DatabaseError(kind, _) = &error {
        debug!(?kind, "account insert failed");
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            map_unique_violation(info.as_ref())
        }
        // The driver text is redacted at the HTTP boundary and logged by the
        // service, so it is carried through unchanged.
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AccountPersistenceError::connection(error.to_string())
        }
        other => AccountPersistenceError::query(other.to_string()),
    }
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn create(&self, account: &NewAccount) -> Result<Account, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted: InsertedAccountRow = diesel::insert_into(accounts::table)
            .values(NewAccountRow::from(account))
            .returning((accounts::id, accounts::created_at))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(account
            .clone()
            .into_account(AccountId::new(inserted.id), inserted.created_at))
    }
}

#[cfg(test)]
mod tests {
    //! Error translation coverage; the insert path needs a live database.
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct ConstraintInfo {
        constraint: Option<&'static str>,
        message: &'static str,
    }

    impl DatabaseErrorInformation for ConstraintInfo {
        fn message(&self) -> &str {
            self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            Some("accounts")
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn unique_violation(constraint: Option<&'static str>, message: &'static str) -> DieselError {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(ConstraintInfo {
                constraint,
                message,
            }),
        )
    }

    #[rstest]
    #[case(USERNAME_CONSTRAINT, UniqueField::Username)]
    #[case(EMAIL_CONSTRAINT, UniqueField::Email)]
    fn named_constraints_map_to_unique_fields(
        #[case] constraint: &'static str,
        #[case] field: UniqueField,
    ) {
        let mapped = map_diesel_error(unique_violation(Some(constraint), "duplicate key value"));
        assert_eq!(mapped, AccountPersistenceError::unique_violation(field));
    }

    #[rstest]
    fn unknown_constraint_keeps_driver_message() {
        let message = "duplicate key value violates unique constraint \"accounts_lower_email_idx\"";
        let mapped = map_diesel_error(unique_violation(Some("accounts_lower_email_idx"), message));
        assert_eq!(mapped, AccountPersistenceError::query(message));
    }

    #[rstest]
    fn unique_violation_without_constraint_keeps_driver_message() {
        let mapped = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key on username".to_owned()),
        ));
        assert_eq!(
            mapped,
            AccountPersistenceError::query("duplicate key on username")
        );
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let mapped = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ));
        assert!(matches!(mapped, AccountPersistenceError::Connection { .. }));
        assert!(mapped.to_string().contains("server closed the connection"));
    }

    #[rstest]
    #[case(DieselError::NotFound, "Record not found")]
    #[case(
        DieselError::DatabaseError(
            DatabaseErrorKind::NotNullViolation,
            Box::new(
                "null value in column \"password_hash\" violates not-null constraint".to_owned()
            ),
        ),
        "password_hash"
    )]
    #[case(
        DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation,
            Box::new("new row violates check constraint \"accounts_bio_len\"".to_owned()),
        ),
        "accounts_bio_len"
    )]
    fn other_failures_keep_driver_detail(#[case] error: DieselError, #[case] detail: &str) {
        let mapped = map_diesel_error(error);
        assert!(matches!(mapped, AccountPersistenceError::Query { .. }));
        assert!(mapped.to_string().contains(detail));
    }

    #[rstest]
    fn pool_failures_are_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out waiting for connection"));
        assert_eq!(
            mapped,
            AccountPersistenceError::connection("timed out waiting for connection")
        );
    }
}
