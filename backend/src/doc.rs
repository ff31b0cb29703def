//! OpenAPI documentation for the registration API.
//!
//! [`ApiDoc`] collects the registration path and its envelope schemas. Swagger
//! UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::Account;
use crate::inbound::http::accounts::RegisterAccountRequest;
use crate::inbound::http::envelope::{AccountEnvelope, ErrorEnvelope};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Signup API",
        description = "Account registration with hashed credentials and uniqueness checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::accounts::register),
    components(schemas(RegisterAccountRequest, Account, AccountEnvelope, ErrorEnvelope)),
    tags(
        (name = "accounts", description = "Account registration")
    )
)]
pub struct ApiDoc;
