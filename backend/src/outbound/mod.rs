//! Outbound adapters.
//!
//! Currently limited to the JSON user fixture that seeds the in-memory user
//! directory at startup.

pub mod user_fixture;

pub use user_fixture::{UserFixtureError, load_user_directory, user_directory_from_json};
