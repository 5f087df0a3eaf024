use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// `host:port`, host must be an IP literal (`[::1]:53`, `0.0.0.0:53`)
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    /// Number of concurrent socket readers; defaults to available parallelism
    #[serde(default)]
    pub workers: Option<usize>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_address.parse().map_err(|e| {
            ConfigError::Validation(format!(
                "Invalid listen address \"{}\": {}",
                self.listen_address, e
            ))
        })
    }

    pub fn worker_count(&self) -> usize {
        self.workers
            .filter(|&n| n > 0)
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            workers: None,
        }
    }
}

fn default_listen_address() -> String {
    "[::1]:53".to_string()
}
