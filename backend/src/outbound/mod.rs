//! Outbound adapters implementing domain ports.
//!
//! - **hashing**: Argon2id credential hasher.
//! - **persistence**: PostgreSQL and in-memory account stores.
//!
//! Adapters translate between domain types and infrastructure types and hold
//! no business rules.

pub mod hashing;
pub mod persistence;
