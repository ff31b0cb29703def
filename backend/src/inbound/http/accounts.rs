//! Account registration endpoint.
//!
//! ```text
//! POST /api/v1/users {"username":"alice","email":"alice@example.com","password":"s3cret"}
//! ```

use std::fmt;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, post, web};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, RegistrationError, RegistrationRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{AccountEnvelope, ErrorEnvelope};
use crate::inbound::http::state::HttpState;

/// Registration body for `POST /api/v1/users`.
///
/// Absent string fields decode as empty and are reported by validation.
#[derive(Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterAccountRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "s3cret", format = Password)]
    pub password: String,
    #[schema(example = "Runs before breakfast")]
    pub bio: Option<String>,
}

impl RegisterAccountRequest {
    /// Decode a registration body, accepting JSON objects only.
    ///
    /// Serde would otherwise bind a JSON array to the fields in declaration
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::BadPayload`] for non-object documents and
    /// for fields of the wrong JSON type.
    pub fn from_json(document: Value) -> Result<Self, RegistrationError> {
        if !document.is_object() {
            debug!("registration payload is not a JSON object");
            return Err(RegistrationError::BadPayload);
        }
        serde_json::from_value(document).map_err(|err| {
            debug!(error = %err, "registration payload has mistyped fields");
            RegistrationError::BadPayload
        })
    }
}

impl fmt::Debug for RegisterAccountRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterAccountRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("bio", &self.bio)
            .finish()
    }
}

impl From<RegisterAccountRequest> for RegistrationRequest {
    fn from(value: RegisterAccountRequest) -> Self {
        let RegisterAccountRequest {
            username,
            email,
            password,
            bio,
        } = value;
        Self::new(username, email, password, bio)
    }
}

/// Translate a registration failure into the transport-agnostic error.
pub fn map_registration_error(err: RegistrationError) -> Error {
    let message = err.to_string();
    match err {
        RegistrationError::BadPayload | RegistrationError::InvalidInput(_) => {
            Error::invalid_request(message)
        }
        RegistrationError::UsernameTaken | RegistrationError::EmailTaken => {
            Error::conflict(message)
        }
        RegistrationError::InternalFailure => Error::internal(message),
    }
}

fn reject_payload(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "registration payload could not be decoded");
    map_registration_error(RegistrationError::BadPayload).into()
}

/// JSON extractor settings that report decode failures with the envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_payload)
}

/// Register the endpoint and its extractor settings on a scope.
///
/// ```
/// use actix_web::{App, web};
/// use signup::inbound::http::accounts;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(accounts::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(register);
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterAccountRequest,
    responses(
        (status = 201, description = "Account created", body = AccountEnvelope),
        (status = 400, description = "Malformed body or invalid field", body = ErrorEnvelope),
        (status = 409, description = "Username or email already registered", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["accounts"],
    operation_id = "registerAccount"
)]
#[post("/users")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let request =
        RegisterAccountRequest::from_json(payload.into_inner()).map_err(map_registration_error)?;
    let account = state
        .registration
        .register(request.into())
        .await
        .map_err(map_registration_error)?;
    Ok(HttpResponse::Created().json(AccountEnvelope::from(account)))
}

#[cfg(test)]
mod tests;
