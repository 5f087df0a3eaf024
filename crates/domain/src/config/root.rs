use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::blocking::BlockingConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use crate::regex_filter::BlockRegexList;

const LOCAL_CONFIG_PATH: &str = "dohgate.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dohgate/config.toml";

/// Main configuration structure for dohgate
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket
    #[serde(default)]
    pub server: ServerConfig,

    /// DoH upstreams
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Exact and regex blocklists
    #[serde(default)]
    pub blocking: BlockingConfig,

    /// Static overrides: domain (or `*.sld.tld`) → IP literal
    #[serde(default)]
    pub resolve: BTreeMap<String, String>,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dohgate.toml in current directory
    /// 3. /etc/dohgate/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Non-empty CLI lists replace the file's lists; resolve entries merge over it.
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(address) = overrides.listen_address {
            self.server.listen_address = address;
        }
        if let Some(workers) = overrides.workers {
            self.server.workers = Some(workers);
        }
        if !overrides.upstreams.is_empty() {
            self.upstream.servers = overrides.upstreams;
        }
        if !overrides.blocklist.is_empty() {
            self.blocking.blocklist = overrides.blocklist;
        }
        if !overrides.blockregex.is_empty() {
            self.blocking.blockregex = overrides.blockregex;
        }
        self.resolve.extend(overrides.resolve);
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Rejects settings the domain can check on its own.
    ///
    /// Upstream URLs are parsed once, when the forwarder's endpoints are built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;

        if self.upstream.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        BlockRegexList::compile(&self.blocking.blockregex)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen_address: Option<String>,
    pub workers: Option<usize>,
    pub upstreams: Vec<String>,
    pub blocklist: Vec<String>,
    pub blockregex: Vec<String>,
    pub resolve: Vec<(String, String)>,
    pub log_level: Option<String>,
}
