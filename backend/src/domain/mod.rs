//! Domain primitives, ports, and services.
//!
//! Purpose: hold the login use-case independently of HTTP and of the fixture
//! file format. Inbound adapters translate wire payloads into
//! [`LoginCredentials`]; outbound adapters build a [`ports::UserDirectory`].
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `LoginCredentials` / `LoginValidationError`: validated login input.
//! - `User` / `UserRecord` / `UserId`: user projection and directory entry.
//! - `DirectoryLoginService`: directory-backed implementation of
//!   [`ports::LoginService`].
//! - `TraceId`: request correlation identifier.

pub mod auth;
pub mod error;
pub mod login_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{EMAIL_PATTERN, LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, INVALID_CREDENTIALS_MESSAGE, TRACE_ID_HEADER};
pub use self::login_service::DirectoryLoginService;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserRecord};
