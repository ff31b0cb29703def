//! HTTP inbound adapter exposing the registration endpoint.

pub mod accounts;
pub mod envelope;
pub mod error;
pub mod state;

pub use error::ApiResult;
