//! End-to-end coverage for `POST /anything/api/login`.
//!
//! Requests run through the production app wiring (trace middleware, JSON
//! error handler, directory-backed login service) over the three-user sample
//! fixture.

use actix_web::http::{StatusCode, header};
use actix_web::test as actix_test;
use login_backend::domain::TRACE_ID_HEADER;
use login_backend::server::build_app;
use login_backend::test_support::sample_app_dependencies;
use rstest::rstest;
use serde_json::{Value, json};

struct LoginReply {
    status: StatusCode,
    trace_id: Option<String>,
    body: Value,
}

async fn send(request: actix_test::TestRequest) -> LoginReply {
    let app = actix_test::init_service(build_app(sample_app_dependencies())).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = actix_test::read_body(response).await;
    let body = serde_json::from_slice(&bytes).expect("response body is JSON");
    LoginReply {
        status,
        trace_id,
        body,
    }
}

async fn login(body: Value) -> LoginReply {
    send(
        actix_test::TestRequest::post()
            .uri("/anything/api/login")
            .insert_header((header::USER_AGENT, "integration-test/1.0"))
            .set_json(body),
    )
    .await
}

#[rstest]
#[case("user@example.com", "mypassword123", 1, "Alice")]
#[case("bob.smith@example.org", "correct horse battery staple", 2, "Bob Smith")]
#[case("carol+ops@example.net", "s3cr3t!", 3, "Carol")]
#[actix_web::test]
async fn every_fixture_user_can_log_in(
    #[case] email: &str,
    #[case] password: &str,
    #[case] id: i64,
    #[case] name: &str,
) {
    let reply = login(json!({"email": email, "password": password})).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!({"id": id, "name": name, "email": email}));
}

#[rstest]
#[case(json!({}))]
#[case(json!({"email": "user@example.com"}))]
#[case(json!({"password": "mypassword123"}))]
#[case(json!({"email": "", "password": ""}))]
#[case(json!({"email": null, "password": "mypassword123"}))]
#[actix_web::test]
async fn absent_fields_are_missing_input(#[case] body: Value) {
    let reply = login(body).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, json!({"error": "Missing input"}));
}

#[rstest]
#[case("not-an-email")]
#[case("user@localhost")]
#[case("user@example.c")]
#[case("user @example.com")]
#[actix_web::test]
async fn malformed_emails_are_rejected_before_lookup(#[case] email: &str) {
    let reply = login(json!({"email": email, "password": "mypassword123"})).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, json!({"error": "Invalid email format"}));
}

#[actix_web::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let wrong_password =
        login(json!({"email": "user@example.com", "password": "not-the-password"})).await;
    let unknown_email =
        login(json!({"email": "ghost@example.com", "password": "mypassword123"})).await;

    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(
        wrong_password.body,
        json!({"error": "Invalid login credentials"})
    );
}

#[rstest]
#[case("USER@example.com")]
#[case("user@Example.com")]
#[actix_web::test]
async fn email_lookup_is_case_sensitive(#[case] email: &str) {
    let reply = login(json!({"email": email, "password": "mypassword123"})).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, json!({"error": "Invalid login credentials"}));
}

#[actix_web::test]
async fn repeated_logins_return_identical_bodies() {
    let body = json!({"email": "user@example.com", "password": "mypassword123"});
    let first = login(body.clone()).await;
    let second = login(body).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[actix_web::test]
async fn success_never_echoes_the_password() {
    let reply = login(json!({"email": "user@example.com", "password": "mypassword123"})).await;
    let rendered = reply.body.to_string();
    assert!(!rendered.contains("mypassword123"));
    assert!(reply.body.get("password").is_none());
}

#[rstest]
#[case(json!({"email": "user@example.com", "password": "mypassword123"}), StatusCode::OK)]
#[case(json!({"email": "user@example.com", "password": "nope"}), StatusCode::BAD_REQUEST)]
#[case(json!({}), StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn every_response_carries_a_trace_id(#[case] body: Value, #[case] status: StatusCode) {
    let reply = login(body).await;
    assert_eq!(reply.status, status);
    let trace_id = reply.trace_id.expect("trace-id header");
    assert!(uuid::Uuid::parse_str(&trace_id).is_ok());
}

#[actix_web::test]
async fn invalid_json_uses_the_error_envelope() {
    let reply = send(
        actix_test::TestRequest::post()
            .uri("/anything/api/login")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"email\": "),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, json!({"error": "Invalid request body"}));
}

#[actix_web::test]
async fn control_characters_in_user_agent_do_not_break_login() {
    let reply = send(
        actix_test::TestRequest::post()
            .uri("/anything/api/login")
            .insert_header((header::USER_AGENT, "evil\tagent"))
            .set_json(json!({"email": "user@example.com", "password": "mypassword123"})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
}
