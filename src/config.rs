//! Config types for the application.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Bind address for the calculator page server.
#[derive(Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// The socket address to bind the HTTP server to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let host: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid host address: {}", self.host))?;
        Ok(SocketAddr::new(host, self.port))
    }

    /// The URL shown to the operator and opened in the browser.
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
