//! Client side: the transfer client and its pause/resume control input.

pub mod config;
pub mod control;
pub mod core;

pub use config::ClientConfig;
pub use control::{ControlHandle, ControlInput};
pub use core::FtpClient;
