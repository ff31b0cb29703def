//! Diesel table definitions. Keep in step with `backend/migrations`.

diesel::table! {
    /// Registered accounts. `username` and `email` carry unique constraints
    /// named `accounts_username_key` and `accounts_email_key`.
    accounts (id) {
        id -> Int8,
        username -> Varchar,
        email -> Varchar,
        bio -> Nullable<Text>,
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}
