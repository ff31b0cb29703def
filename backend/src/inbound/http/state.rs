//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they can be tested with doubles and no I/O.

use std::sync::Arc;

use crate::domain::ports::AccountRegistration;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn AccountRegistration>,
}

impl HttpState {
    pub fn new(registration: Arc<dyn AccountRegistration>) -> Self {
        Self { registration }
    }
}
