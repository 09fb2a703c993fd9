//! Startup loader for the mock user fixture.
//!
//! Expected file shape:
//!
//! ```json
//! {"users": {"user@example.com": {"id": 1, "name": "Alice", "email": "user@example.com", "password": "mypassword123"}}}
//! ```
//!
//! Loading happens once, before the server binds. Every failure is fatal to
//! startup; there is no retry and no reload.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::{InMemoryUserDirectory, UserDirectoryError};
use crate::domain::{User, UserId, UserRecord};

/// Errors raised while loading the user fixture.
#[derive(Debug, Error)]
pub enum UserFixtureError {
    /// The fixture file could not be opened or read as UTF-8 text.
    #[error("failed to read user fixture at {path}: {source}")]
    Read {
        /// Path to the fixture file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The content is not JSON of the expected shape.
    #[error("malformed user fixture: {0}")]
    Parse(#[from] serde_json::Error),
    /// A `users` map key disagrees with the record's `email`.
    #[error("user fixture key {key} does not match record email {email}")]
    KeyMismatch {
        /// Map key in the fixture.
        key: String,
        /// Email field of the record stored under that key.
        email: String,
    },
    /// The records could not form a directory.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
}

#[derive(Debug, Deserialize)]
struct UserFixtureFile {
    users: BTreeMap<String, FixtureUser>,
}

#[derive(Deserialize)]
struct FixtureUser {
    id: i64,
    name: String,
    email: String,
    password: String,
}

impl std::fmt::Debug for FixtureUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Build a directory from fixture JSON text.
///
/// # Errors
/// Returns [`UserFixtureError::Parse`] for malformed JSON,
/// [`UserFixtureError::KeyMismatch`] when a key differs from its record's
/// email, and [`UserFixtureError::Directory`] for duplicate emails.
///
/// # Examples
/// ```
/// use login_backend::domain::ports::UserDirectory;
/// use login_backend::outbound::user_directory_from_json;
///
/// let json = r#"{"users": {"user@example.com": {
///     "id": 1, "name": "Alice", "email": "user@example.com", "password": "mypassword123"
/// }}}"#;
/// let directory = user_directory_from_json(json).expect("valid fixture");
/// assert!(directory.find_by_email("user@example.com").is_some());
/// ```
pub fn user_directory_from_json(json: &str) -> Result<InMemoryUserDirectory, UserFixtureError> {
    let fixture: UserFixtureFile = serde_json::from_str(json)?;
    let records = fixture
        .users
        .into_iter()
        .map(|(key, user)| {
            if key != user.email {
                return Err(UserFixtureError::KeyMismatch {
                    key,
                    email: user.email,
                });
            }
            let FixtureUser {
                id,
                name,
                email,
                password,
            } = user;
            Ok(UserRecord::new(
                User::new(UserId::new(id), name, email),
                password,
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let directory = InMemoryUserDirectory::new(records)?;
    if directory.is_empty() {
        warn!("user fixture contains no users; every login will be rejected");
    }
    Ok(directory)
}

/// Read the fixture at `path` and build the directory.
///
/// # Errors
/// Returns [`UserFixtureError::Read`] when the file is missing or unreadable,
/// plus every error [`user_directory_from_json`] can raise.
pub fn load_user_directory(path: &Path) -> Result<InMemoryUserDirectory, UserFixtureError> {
    let contents = read_fixture(path)?;
    let directory = user_directory_from_json(&contents)?;
    info!(path = %path.display(), users = directory.len(), "user directory loaded");
    Ok(directory)
}

fn read_fixture(path: &Path) -> Result<String, UserFixtureError> {
    let read_error = |source| UserFixtureError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "user fixture path must name a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(Path::new(file_name)).map_err(read_error)
}
