//! Driving port for the login use-case.
//!
//! HTTP handlers depend on this trait rather than on the directory, which
//! keeps handler tests deterministic: they can swap in a mock without
//! building a fixture file.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check validated credentials and return the password-free projection.
    ///
    /// Unknown emails and wrong passwords must fail identically with
    /// [`Error::invalid_credentials`].
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
