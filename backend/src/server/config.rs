//! HTTP server configuration object.

use std::net::SocketAddr;

use signup::config::HashingCosts;
use signup::outbound::persistence::DbPool;

/// Resolved settings needed to assemble the server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) hashing_costs: HashingCosts,
    pub(crate) conflict_text_fallback: bool,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, hashing_costs: HashingCosts) -> Self {
        Self {
            bind_addr,
            hashing_costs,
            conflict_text_fallback: true,
            db_pool: None,
        }
    }

    /// Back account storage with PostgreSQL instead of process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_conflict_text_fallback(mut self, enabled: bool) -> Self {
        self.conflict_text_fallback = enabled;
        self
    }
}
