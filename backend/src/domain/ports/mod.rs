//! Domain ports defining the edges of the hexagon.
//!
//! `LoginService` is the driving port inbound adapters call; `UserDirectory`
//! is the driven port the login service reads from. Both are object safe so
//! the server wires them as `Arc<dyn ...>` and tests substitute doubles.

mod login_service;
mod user_directory;

#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{InMemoryUserDirectory, UserDirectory, UserDirectoryError};
