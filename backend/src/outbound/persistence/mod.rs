//! Account persistence adapters.
//!
//! - [`DieselAccountRepository`]: PostgreSQL through `diesel-async` and a
//!   `bb8` pool. Row structs and table definitions stay private to this
//!   module.
//! - [`InMemoryAccountRepository`]: process-local store for development and
//!   tests.
//!
//! ```ignore
//! use signup::outbound::persistence::{DbPool, DieselAccountRepository, PoolConfig};
//!
//! let pool = DbPool::connect(&PoolConfig::new("postgres://localhost/signup")).await?;
//! let accounts = DieselAccountRepository::new(pool);
//! ```

mod diesel_account_repository;
mod in_memory_account_repository;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use in_memory_account_repository::InMemoryAccountRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
