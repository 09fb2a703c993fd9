//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they stay testable without a fixture file on disk.

use std::sync::Arc;

use crate::domain::ports::LoginService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Login use-case.
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Construct state from the login port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use login_backend::domain::DirectoryLoginService;
    /// use login_backend::domain::ports::InMemoryUserDirectory;
    /// use login_backend::inbound::http::state::HttpState;
    ///
    /// let directory = InMemoryUserDirectory::default();
    /// let state = HttpState::new(Arc::new(DirectoryLoginService::new(Arc::new(directory))));
    /// let _login = state.login.clone();
    /// ```
    pub fn new(login: Arc<dyn LoginService>) -> Self {
        Self { login }
    }
}
