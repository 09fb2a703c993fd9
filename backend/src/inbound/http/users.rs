//! Login API handler.
//!
//! ```text
//! POST /anything/api/login {"email":"user@example.com","password":"mypassword123"}
//! ```
//!
//! The handler owns the wire shapes and the success log line; validation
//! lives in [`LoginCredentials`] and the lookup in the [`HttpState`] login
//! port.

use actix_web::http::header;
use actix_web::{HttpRequest, post, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::domain::{LoginCredentials, LoginValidationError, User};
use crate::inbound::http::{ApiResult, ErrorBody};
use crate::inbound::http::log_safe::UntrustedText;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /anything/api/login`.
///
/// Both fields are optional on the wire so that absent, `null` and empty
/// values all surface as "Missing input" rather than a decoding failure.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    /// User's email address.
    // Must stay equal to `domain::EMAIL_PATTERN`; the schema tests compare them.
    #[schema(
        value_type = String,
        required = true,
        pattern = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        example = "user@example.com"
    )]
    pub email: Option<String>,
    /// User's password.
    #[schema(value_type = String, required = true, example = "mypassword123")]
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        let LoginRequest { email, password } = value;
        let password = password.map(Zeroizing::new);
        Self::try_from_parts(email.as_deref(), password.as_ref().map(|p| p.as_str()))
    }
}

/// Successful login payload: the user record without its password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// User ID.
    #[schema(example = 1)]
    pub id: i64,
    /// User's name.
    #[schema(example = "Alice")]
    pub name: String,
    /// User's email address.
    #[schema(example = "user@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_owned(),
            email: value.email().to_owned(),
        }
    }
}

fn user_agent(request: &HttpRequest) -> String {
    request
        .headers()
        .get(header::USER_AGENT)
        .map_or_else(
            || "-".to_owned(),
            |value| String::from_utf8_lossy(value.as_bytes()).into_owned(),
        )
}

fn log_success(user: &User, agent: &str) {
    info!(
        email = %UntrustedText::new(user.email()),
        user_agent = %UntrustedText::new(agent),
        "login succeeded"
    );
}

/// Log the user in with email and password.
///
/// Checks run in order and stop at the first failure: presence, email
/// format, directory lookup, password match. Unknown emails and wrong
/// passwords share one message so responses never reveal which accounts
/// exist.
#[utoipa::path(
    post,
    path = "/anything/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Success", body = UserResponse),
        (status = 400, description = "Invalid input or credentials", body = ErrorBody)
    ),
    tags = ["login"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    request: HttpRequest,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let credentials = LoginCredentials::try_from(payload.into_inner())
        .inspect_err(|err| debug!(reason = %err, "login rejected"))?;
    let user = state.login.authenticate(&credentials).await?;

    log_success(&user, &user_agent(&request));
    Ok(web::Json(UserResponse::from(user)))
}
