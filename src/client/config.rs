//! Client configuration
//!
//! Defaults target the local server on port 20000. Overridable via an
//! optional `ferry-client.toml` or `FERRY_CLIENT_*` environment variables.

use serde::Deserialize;

use crate::protocol::{DEFAULT_BUFFER_SIZE, DEFAULT_PORT};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub buffer_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("ferry-client").required(false))
            .add_source(config::Environment::with_prefix("FERRY_CLIENT"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 20000);
        assert_eq!(config.buffer_size, 1024);
    }
}
