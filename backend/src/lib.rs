//! Mock email/password login API.
//!
//! Users are loaded once from a JSON fixture into an in-memory directory and
//! served through `POST /anything/api/login`.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use doc::ApiDoc;
pub use middleware::Trace;
