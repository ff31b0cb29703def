//! Builders wiring adapters into the registration service.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use signup::domain::ports::AccountRepository;
use signup::domain::{ConflictClassifier, RegistrationService};
use signup::inbound::http::state::HttpState;
use signup::outbound::hashing::Argon2CredentialHasher;
use signup::outbound::persistence::{DieselAccountRepository, InMemoryAccountRepository};

use super::ServerConfig;

fn build_account_repository(config: &ServerConfig) -> Arc<dyn AccountRepository> {
    match &config.db_pool {
        Some(pool) => {
            info!("storing accounts in PostgreSQL");
            Arc::new(DieselAccountRepository::new(pool.clone()))
        }
        None => {
            warn!("no database configured; accounts are kept in memory");
            Arc::new(InMemoryAccountRepository::new())
        }
    }
}

/// Assemble handler state from the server configuration.
///
/// # Errors
/// Returns [`std::io::Error`] when the Argon2 costs are rejected.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let costs = config.hashing_costs;
    let hasher = Argon2CredentialHasher::with_costs(
        costs.memory_kib,
        costs.iterations,
        costs.parallelism,
    )
    .map_err(|e| std::io::Error::other(format!("invalid argon2 settings: {e}")))?;

    let registration = RegistrationService::new(build_account_repository(config), Arc::new(hasher))
        .with_classifier(ConflictClassifier::new(config.conflict_text_fallback));

    Ok(web::Data::new(HttpState::new(Arc::new(registration))))
}
