//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `SIGNUP_*` environment variables, an optional
//! configuration file and command-line flags. Optional fields fall back to
//! defaults through the accessor methods below.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONFLICT_TEXT_FALLBACK: bool = true;

/// Settings for the registration server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP")]
pub struct AppSettings {
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. When unset, accounts are kept in memory.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Argon2 memory cost in KiB.
    pub argon2_memory_kib: Option<u32>,
    /// Argon2 iteration count.
    pub argon2_iterations: Option<u32>,
    /// Argon2 degree of parallelism.
    pub argon2_parallelism: Option<u32>,
    /// Classify conflicts from driver error text when the store gives no
    /// structured signal.
    pub conflict_text_fallback: Option<bool>,
}

/// Rejected setting values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Argon2 work factor resolved from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingCosts {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl AppSettings {
    /// Parsed listen address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Database URL with blank values treated as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Whether the text fallback classifier is enabled. On unless disabled.
    pub fn conflict_text_fallback(&self) -> bool {
        self.conflict_text_fallback
            .unwrap_or(DEFAULT_CONFLICT_TEXT_FALLBACK)
    }

    /// Argon2 costs, each defaulting to the argon2 crate's recommendation.
    pub fn hashing_costs(&self) -> HashingCosts {
        HashingCosts {
            memory_kib: self
                .argon2_memory_kib
                .unwrap_or(argon2::Params::DEFAULT_M_COST),
            iterations: self
                .argon2_iterations
                .unwrap_or(argon2::Params::DEFAULT_T_COST),
            parallelism: self
                .argon2_parallelism
                .unwrap_or(argon2::Params::DEFAULT_P_COST),
        }
    }
}
