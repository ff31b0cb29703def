//! Handler tests using a registration double.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::MockAccountRegistration;
use crate::domain::{
    AccountId, AccountValidationError, EmailAddress, NewAccount, PasswordHash, Username,
};

fn stored_account(username: &str, email: &str, bio: Option<&str>) -> crate::domain::Account {
    NewAccount::new(
        Username::new(username).expect("valid username"),
        EmailAddress::new(email).expect("valid email"),
        bio.map(str::to_owned),
        PasswordHash::from_phc("$argon2id$v=19$m=8,t=1,p=1$c2FsdA$ZGlnZXN0"),
    )
    .into_account(
        AccountId::new(7),
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
    )
}

async fn post_raw(
    registration: MockAccountRegistration,
    content_type: &str,
    body: &'static str,
) -> (StatusCode, Value) {
    let state = web::Data::new(HttpState::new(Arc::new(registration)));
    let app = actix_test::init_service(
        App::new()
            .app_data(state)
            .service(web::scope("/api/v1").configure(configure)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

async fn post_json(registration: MockAccountRegistration, body: &'static str) -> (StatusCode, Value) {
    post_raw(registration, "application/json", body).await
}

fn registration_never_called() -> MockAccountRegistration {
    let mut registration = MockAccountRegistration::new();
    registration.expect_register().never();
    registration
}

fn registration_failing_with(err: RegistrationError) -> MockAccountRegistration {
    let mut registration = MockAccountRegistration::new();
    registration
        .expect_register()
        .times(1)
        .returning(move |_| Err(err.clone()));
    registration
}

#[actix_web::test]
async fn created_account_is_wrapped_in_user_envelope() {
    let mut registration = MockAccountRegistration::new();
    registration
        .expect_register()
        .withf(|request| {
            request.username == "alice"
                && request.email == "alice@example.com"
                && request.password.as_str() == "s3cret"
                && request.bio.is_none()
        })
        .times(1)
        .returning(|_| Ok(stored_account("alice", "alice@example.com", None)));

    let (status, body) = post_json(
        registration,
        r#"{"username":"alice","email":"alice@example.com","password":"s3cret"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "user": {
                "id": 7,
                "username": "alice",
                "email": "alice@example.com",
                "createdAt": "2024-05-01T12:00:00Z"
            }
        })
    );
}

#[actix_web::test]
async fn bio_is_forwarded_and_echoed() {
    let mut registration = MockAccountRegistration::new();
    registration
        .expect_register()
        .withf(|request| request.bio.as_deref() == Some("hello"))
        .times(1)
        .returning(|_| Ok(stored_account("bob", "bob@example.com", Some("hello"))));

    let (status, body) = post_json(
        registration,
        r#"{"username":"bob","email":"bob@example.com","password":"pw","bio":"hello"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["bio"], "hello");
    assert!(body["user"].get("password").is_none());
}

#[rstest]
#[case("{not json")]
#[case(r#"{"username":42,"email":"a@b.co","password":"x"}"#)]
#[case(r#"["alice","alice@example.com","s3cret"]"#)]
#[case(r#"["alice","alice@example.com","s3cret",null]"#)]
#[case("null")]
#[case(r#""alice""#)]
#[case("")]
#[actix_web::test]
async fn undecodable_bodies_are_bad_payloads(#[case] body: &'static str) {
    let (status, body) = post_json(registration_never_called(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid request payload" }));
}

#[actix_web::test]
async fn non_json_content_type_is_a_bad_payload() {
    let (status, body) = post_raw(
        registration_never_called(),
        "text/plain",
        r#"{"username":"alice","email":"alice@example.com","password":"s3cret"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid request payload" }));
}

#[actix_web::test]
async fn missing_fields_reach_validation_as_empty() {
    let mut registration = MockAccountRegistration::new();
    registration
        .expect_register()
        .withf(|request| request.username.is_empty() && request.password.is_empty())
        .times(1)
        .returning(|_| {
            Err(RegistrationError::InvalidInput(
                AccountValidationError::EmptyUsername,
            ))
        });

    let (status, body) = post_json(registration, r#"{"email":"alice@example.com"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "username is required" }));
}

#[rstest]
#[case(
    RegistrationError::InvalidInput(AccountValidationError::InvalidEmail),
    StatusCode::BAD_REQUEST,
    "invalid email format"
)]
#[case(
    RegistrationError::InvalidInput(AccountValidationError::UsernameTooLong { max: 50 }),
    StatusCode::BAD_REQUEST,
    "username cannot be greater than 50 characters"
)]
#[case(
    RegistrationError::UsernameTaken,
    StatusCode::CONFLICT,
    "username already exists"
)]
#[case(RegistrationError::EmailTaken, StatusCode::CONFLICT, "email already exists")]
#[case(
    RegistrationError::InternalFailure,
    StatusCode::INTERNAL_SERVER_ERROR,
    "internal server error"
)]
#[actix_web::test]
async fn registration_failures_map_to_status_and_envelope(
    #[case] failure: RegistrationError,
    #[case] expected_status: StatusCode,
    #[case] expected_message: &str,
) {
    let (status, body) = post_json(
        registration_failing_with(failure),
        r#"{"username":"alice","email":"alice@example.com","password":"s3cret"}"#,
    )
    .await;

    assert_eq!(status, expected_status);
    assert_eq!(body, json!({ "error": expected_message }));
}

#[rstest]
#[case(json!(["alice", "alice@example.com", "s3cret", null]))]
#[case(json!(null))]
#[case(json!(42))]
#[case(json!({ "username": "alice", "email": ["alice@example.com"], "password": "s3cret" }))]
fn non_object_or_mistyped_documents_are_rejected(#[case] document: Value) {
    let err = RegisterAccountRequest::from_json(document).expect_err("document is rejected");
    assert_eq!(err, RegistrationError::BadPayload);
}

#[rstest]
fn object_documents_decode_with_missing_fields_empty() {
    let request = RegisterAccountRequest::from_json(json!({ "email": "alice@example.com" }))
        .expect("object decodes");
    assert!(request.username.is_empty());
    assert_eq!(request.email, "alice@example.com");
    assert!(request.password.is_empty());
    assert!(request.bio.is_none());
}

#[rstest]
fn request_debug_output_redacts_password() {
    let request = RegisterAccountRequest {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "hunter2".to_owned(),
        bio: None,
    };
    assert!(!format!("{request:?}").contains("hunter2"));
}
