//! User records held by the directory and the projection returned to clients.

use std::fmt;

use zeroize::Zeroizing;

/// Numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client-visible projection of a user: everything except the password.
///
/// # Examples
/// ```
/// use login_backend::domain::{User, UserId};
///
/// let user = User::new(UserId::new(1), "Alice", "user@example.com");
/// assert_eq!(user.name(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a user projection.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address; also the directory key.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Directory entry pairing a [`User`] with its plaintext password.
///
/// The password never leaves this type except through
/// [`UserRecord::password_matches`], is redacted from `Debug`, and is zeroised
/// on drop. Plaintext storage mirrors the mock fixture format and is not
/// suitable for production credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    user: User,
    password: Zeroizing<String>,
}

impl UserRecord {
    /// Pair a user with its stored password.
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self {
            user,
            password: Zeroizing::new(password.into()),
        }
    }

    /// The password-free projection.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Consume the record, dropping the password.
    pub fn into_user(self) -> User {
        let Self { user, password: _ } = self;
        user
    }

    /// Byte-for-byte comparison against a supplied password.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_bytes() == candidate.as_bytes()
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
