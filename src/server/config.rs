//! Server configuration
//!
//! Defaults match the protocol contract (loopback, port 20000, 1024-byte
//! chunks, backlog 5). Values can be overridden by an optional
//! `ferry-server.toml` next to the process or `FERRY_SERVER_*` environment
//! variables.

use serde::Deserialize;
use std::path::PathBuf;

use crate::protocol::{DEFAULT_BUFFER_SIZE, DEFAULT_PORT};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub backlog: u32,
    pub buffer_size: usize,
    /// Directory tree exposed to clients; each session starts here.
    pub server_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            backlog: 5,
            buffer_size: DEFAULT_BUFFER_SIZE,
            server_root: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the optional file and environment overrides,
    /// falling back to defaults for anything unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("ferry-server").required(false))
            .add_source(config::Environment::with_prefix("FERRY_SERVER"))
            .build()?
            .try_deserialize()
    }
}
