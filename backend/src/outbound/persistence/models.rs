//! Internal Diesel row structs. Never exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::NewAccount;

use super::schema::accounts;

/// Insertable row for a new account. `id` and `created_at` are assigned by
/// the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct NewAccountRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub bio: Option<&'a str>,
    pub password_hash: &'a str,
}

impl<'a> From<&'a NewAccount> for NewAccountRow<'a> {
    fn from(account: &'a NewAccount) -> Self {
        Self {
            username: account.username().as_ref(),
            email: account.email().as_ref(),
            bio: account.bio(),
            password_hash: account.credential().as_phc(),
        }
    }
}

/// Columns returned by the insert.
#[derive(Debug, Clone, Copy, Queryable)]
pub(crate) struct InsertedAccountRow {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}
