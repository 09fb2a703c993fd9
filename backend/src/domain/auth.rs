//! Login credential validation.
//!
//! Raw inbound values pass through `LOGIN_CHECKS`, an ordered list of
//! predicates that stops at the first failure. Only input that clears every
//! check becomes [`LoginCredentials`], so the login service never sees an
//! absent field or a malformed email.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use zeroize::Zeroizing;

/// Pattern a login email must match.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(EMAIL_PATTERN)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Rejections raised before any directory lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    /// Email or password was absent or empty.
    #[error("Missing input")]
    MissingInput,
    /// Email does not match [`EMAIL_PATTERN`].
    #[error("Invalid email format")]
    InvalidEmailFormat,
}

/// Raw login values as they arrive from an adapter.
#[derive(Debug, Clone, Copy)]
struct LoginInput<'a> {
    email: Option<&'a str>,
    password: Option<&'a str>,
}

type LoginCheck = fn(&LoginInput<'_>) -> Result<(), LoginValidationError>;

/// Validation steps, executed in order.
const LOGIN_CHECKS: [LoginCheck; 2] = [require_presence, require_email_format];

fn require_presence(input: &LoginInput<'_>) -> Result<(), LoginValidationError> {
    let present = |value: Option<&str>| value.is_some_and(|v| !v.is_empty());
    if present(input.email) && present(input.password) {
        Ok(())
    } else {
        Err(LoginValidationError::MissingInput)
    }
}

fn require_email_format(input: &LoginInput<'_>) -> Result<(), LoginValidationError> {
    match input.email {
        Some(email) if email_regex().is_match(email) => Ok(()),
        _ => Err(LoginValidationError::InvalidEmailFormat),
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is non-empty and matches [`EMAIL_PATTERN`]. It is kept exactly
///   as supplied: no trimming, no case folding.
/// - `password` is non-empty and is zeroised on drop.
///
/// # Examples
/// ```
/// use login_backend::domain::{LoginCredentials, LoginValidationError};
///
/// let creds = LoginCredentials::try_from_parts(Some("user@example.com"), Some("pw")).unwrap();
/// assert_eq!(creds.email(), "user@example.com");
///
/// let err = LoginCredentials::try_from_parts(Some("nope"), Some("pw")).unwrap_err();
/// assert_eq!(err, LoginValidationError::InvalidEmailFormat);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Run the validation pipeline over raw inputs.
    ///
    /// # Errors
    /// Returns the first failing check's [`LoginValidationError`].
    pub fn try_from_parts(
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, LoginValidationError> {
        let input = LoginInput { email, password };
        LOGIN_CHECKS.iter().try_for_each(|check| check(&input))?;

        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(LoginValidationError::MissingInput);
        };
        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used as the directory key.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
