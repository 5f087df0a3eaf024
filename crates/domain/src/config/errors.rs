/// Startup-time configuration failures; any of them aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Invalid TOML in config: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}
