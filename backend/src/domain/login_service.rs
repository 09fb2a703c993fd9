//! Directory-backed login use-case.
//!
//! Runs the last two steps of the login pipeline, lookup and credential
//! match, after [`LoginCredentials`] has already cleared presence and format
//! checks.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{LoginService, UserDirectory};
use crate::domain::{Error, LoginCredentials, User};

/// Authenticates against a preloaded [`UserDirectory`].
#[derive(Clone)]
pub struct DirectoryLoginService {
    directory: Arc<dyn UserDirectory>,
}

impl DirectoryLoginService {
    /// Wrap the directory built at startup.
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Look up the email and compare passwords.
    ///
    /// # Errors
    /// Returns [`Error::invalid_credentials`] for an unknown email and for a
    /// wrong password alike.
    pub fn verify(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let Some(record) = self.directory.find_by_email(credentials.email()) else {
            debug!(reason = "unknown_email", "login rejected");
            return Err(Error::invalid_credentials());
        };
        if !record.password_matches(credentials.password()) {
            debug!(reason = "password_mismatch", "login rejected");
            return Err(Error::invalid_credentials());
        }
        Ok(record.into_user())
    }
}

#[async_trait]
impl LoginService for DirectoryLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        self.verify(credentials)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{InMemoryUserDirectory, MockUserDirectory};
    use crate::domain::{ErrorCode, INVALID_CREDENTIALS_MESSAGE, UserId, UserRecord};
    use rstest::rstest;
    use rstest_bdd_macros::{given, then, when};

    fn alice() -> UserRecord {
        UserRecord::new(
            User::new(UserId::new(1), "Alice", "user@example.com"),
            "mypassword123",
        )
    }

    fn service() -> DirectoryLoginService {
        let directory = InMemoryUserDirectory::new([alice()]).expect("unique emails");
        DirectoryLoginService::new(Arc::new(directory))
    }

    fn credentials(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials::try_from_parts(Some(email), Some(password)).expect("valid shape")
    }

    #[given("the credentials of a known user")]
    fn known_user_credentials() -> LoginCredentials {
        credentials("user@example.com", "mypassword123")
    }

    #[given("a known email with the wrong password")]
    fn wrong_password_credentials() -> LoginCredentials {
        credentials("user@example.com", "wrong")
    }

    #[given("an email missing from the directory")]
    fn unknown_email_credentials() -> LoginCredentials {
        credentials("nobody@example.com", "mypassword123")
    }

    #[when("the login service verifies them")]
    fn login_service_verifies(credentials: LoginCredentials) -> Result<User, Error> {
        service().verify(&credentials)
    }

    #[then("the user projection is returned")]
    fn user_projection_is_returned(result: Result<User, Error>) {
        let user = result.expect("expected authentication success");
        assert_eq!(user, User::new(UserId::new(1), "Alice", "user@example.com"));
    }

    #[then("the invalid credentials error is returned")]
    fn invalid_credentials_error_is_returned(result: Result<User, Error>) {
        let error = result.expect_err("should be an error");
        assert_eq!(error.code(), ErrorCode::InvalidCredentials);
        assert_eq!(error.message(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[rstest]
    fn login_happy_path() {
        let result = login_service_verifies(known_user_credentials());
        user_projection_is_returned(result);
    }

    #[rstest]
    fn wrong_password_is_rejected() {
        let result = login_service_verifies(wrong_password_credentials());
        invalid_credentials_error_is_returned(result);
    }

    #[rstest]
    fn unknown_email_is_rejected() {
        let result = login_service_verifies(unknown_email_credentials());
        invalid_credentials_error_is_returned(result);
    }

    #[rstest]
    fn unknown_email_and_wrong_password_are_indistinguishable() {
        let wrong_password = login_service_verifies(wrong_password_credentials())
            .expect_err("wrong password fails");
        let unknown_email = login_service_verifies(unknown_email_credentials())
            .expect_err("unknown email fails");
        assert_eq!(wrong_password, unknown_email);
    }

    #[rstest]
    #[tokio::test]
    async fn authenticate_queries_the_directory_once() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Some(alice()));
        let service = DirectoryLoginService::new(Arc::new(directory));

        let user = service
            .authenticate(&known_user_credentials())
            .await
            .expect("login succeeds");
        assert_eq!(user.email(), "user@example.com");
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let result = service()
            .authenticate(&credentials("USER@example.com", "mypassword123"))
            .await;
        let error = result.expect_err("case mismatch is an unknown email");
        assert_eq!(error.code(), ErrorCode::InvalidCredentials);
    }
}
