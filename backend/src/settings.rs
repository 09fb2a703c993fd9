//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `LOGIN_*` environment variables, an optional config file,
//! or command-line flags. Every field is optional and falls back to a
//! built-in default.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Bundled fixture inside the source checkout. Deployed binaries should set
/// `LOGIN_USERS_PATH`, since this path is fixed at compile time.
fn default_users_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("mock_users.json")
}

/// Failure to turn settings into a listen address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `host` is not an IP address literal.
    #[error("invalid listen host {host:?}: expected an IP address")]
    InvalidHost {
        /// Offending value.
        host: String,
    },
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOGIN")]
pub struct LoginSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Path of the JSON user fixture.
    pub users_path: Option<PathBuf>,
}

impl LoginSettings {
    /// Configured host, or `0.0.0.0`.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, or `5000`.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured fixture path, or the bundled `fixtures/mock_users.json`.
    ///
    /// The fallback resolves against the build machine's checkout, so it only
    /// suits `cargo run` and tests.
    pub fn users_path(&self) -> PathBuf {
        self.users_path.clone().unwrap_or_else(default_users_path)
    }

    /// Socket address assembled from [`Self::host`] and [`Self::port`].
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host does not parse as
    /// an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip: IpAddr = self
            .host()
            .parse()
            .map_err(|_| SettingsError::InvalidHost {
                host: self.host().to_owned(),
            })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
