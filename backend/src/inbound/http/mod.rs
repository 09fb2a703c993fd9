//! HTTP inbound adapter exposing the login API.
//!
//! ```text
//! POST /anything/api/login  {"email":"user@example.com","password":"mypassword123"}
//! GET  /anything/api/schema
//! GET  /health/ready
//! GET  /health/live
//! ```

pub mod error;
pub mod health;
pub mod log_safe;
pub mod schema;
pub mod state;
pub mod users;

use actix_web::{Scope, web};

pub use error::{ApiResult, ErrorBody};

/// Path prefix shared by the login and schema endpoints.
pub const API_PREFIX: &str = "/anything/api";

/// Scope serving the login and schema endpoints.
///
/// JSON extraction failures are mapped onto the standard error envelope, so
/// callers always receive `{"error": ...}` on a 400.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use login_backend::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope(API_PREFIX)
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(users::login)
        .service(schema::schema_document)
}
