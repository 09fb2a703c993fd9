//! OpenAPI document for the login API.
//!
//! The same document backs `GET /anything/api/schema`, Swagger UI in debug
//! builds, and the `openapi-dump` binary.

use std::sync::OnceLock;

use utoipa::OpenApi;

use crate::inbound::http::ErrorBody;
use crate::inbound::http::users::{LoginRequest, UserResponse};

/// OpenAPI description of every HTTP endpoint.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Login API",
        version = "1.0",
        description = "API for user login."
    ),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::schema::schema_document,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(LoginRequest, UserResponse, ErrorBody)),
    tags(
        (name = "login", description = "Email and password authentication"),
        (name = "schema", description = "Machine-readable API description"),
        (name = "health", description = "Orchestrator probes")
    )
)]
pub struct ApiDoc;

static DOCUMENT: OnceLock<utoipa::openapi::OpenApi> = OnceLock::new();

/// The generated document, built on first use.
///
/// # Examples
/// ```
/// use login_backend::doc::api_document;
///
/// assert!(std::ptr::eq(api_document(), api_document()));
/// ```
pub fn api_document() -> &'static utoipa::openapi::OpenApi {
    DOCUMENT.get_or_init(ApiDoc::openapi)
}
