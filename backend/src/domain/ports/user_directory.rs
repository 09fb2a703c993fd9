//! Driven port for reading the user directory.
//!
//! The directory is built once at startup and never mutated, so lookups are
//! plain reads with no synchronisation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use thiserror::Error;

use crate::domain::UserRecord;

/// Errors raised while assembling a directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserDirectoryError {
    /// Two records share the same email key.
    #[error("duplicate user email in directory: {email}")]
    DuplicateEmail {
        /// The repeated email.
        email: String,
    },
}

/// Read-only lookup of user records by email.
#[cfg_attr(test, mockall::automock)]
pub trait UserDirectory: Send + Sync {
    /// Return the record stored under `email`, matched exactly.
    fn find_by_email(&self, email: &str) -> Option<UserRecord>;
}

/// Immutable in-memory directory keyed by email.
///
/// # Examples
/// ```
/// use login_backend::domain::ports::{InMemoryUserDirectory, UserDirectory};
/// use login_backend::domain::{User, UserId, UserRecord};
///
/// let alice = UserRecord::new(User::new(UserId::new(1), "Alice", "user@example.com"), "pw");
/// let directory = InMemoryUserDirectory::new([alice]).expect("unique emails");
/// assert!(directory.find_by_email("user@example.com").is_some());
/// assert!(directory.find_by_email("USER@example.com").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserDirectory {
    /// Build a directory keyed by each record's email.
    ///
    /// # Errors
    /// Returns [`UserDirectoryError::DuplicateEmail`] when two records share
    /// an email.
    pub fn new(
        records: impl IntoIterator<Item = UserRecord>,
    ) -> Result<Self, UserDirectoryError> {
        let mut users = HashMap::new();
        for record in records {
            match users.entry(record.user().email().to_owned()) {
                Entry::Occupied(entry) => {
                    return Err(UserDirectoryError::DuplicateEmail {
                        email: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(record);
                }
            }
        }
        Ok(Self { users })
    }

    /// Number of users held.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users.get(email).cloned()
    }
}
