//! Inputs required to start the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::ports::UserDirectory;

/// Listen address plus the preloaded user directory.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) directory: Arc<dyn UserDirectory>,
}

impl ServerConfig {
    /// Bundle startup inputs.
    pub fn new(bind_addr: SocketAddr, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            bind_addr,
            directory,
        }
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
