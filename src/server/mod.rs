//! Server side: listener, configuration, and the per-connection session.

pub mod config;
pub mod core;
pub mod session;

pub use config::ServerConfig;
pub use core::Server;
