//! Ferry FTP - a minimal file transfer service.
//!
//! A server exposes a directory tree over a small line-oriented command
//! protocol (LIST, CWD, RETR, DEL, HELP, QUIT); the client issues commands
//! over a persistent connection and streams downloads with a user-driven
//! pause/resume toggle.

pub mod client;
pub mod error;
pub mod protocol;
pub mod server;
pub mod storage;
pub mod transfer;

pub use client::FtpClient;
pub use server::Server;
