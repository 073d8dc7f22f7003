//! Wire protocol
//!
//! Shared contract between the server and the transfer client: command
//! parsing and the fixed response texts. Commands are single lines; responses
//! are either a newline-terminated text line (or block of lines) or, for
//! RETR, a decimal byte-count line followed by exactly that many raw bytes.

pub mod commands;
pub mod responses;

pub use commands::{Command, parse_command};

/// Default control port for both sides.
pub const DEFAULT_PORT: u16 = 20000;

/// Default chunk size for socket reads and file streaming.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;
