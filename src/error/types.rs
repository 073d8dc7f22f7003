//! Error types
//!
//! Domain-specific error types for each module of the transfer service.
//! Command-level failures are reported to the peer as a generic text line;
//! these types carry the detail for the local log.

use std::fmt;
use std::io;

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    FileNotFound(String),
    DirectoryNotFound(String),
    NotAFile(String),
    NotADirectory(String),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::FileNotFound(p) => write!(f, "File not found: {}", p),
            StorageError::DirectoryNotFound(p) => write!(f, "Directory not found: {}", p),
            StorageError::NotAFile(p) => write!(f, "Not a regular file: {}", p),
            StorageError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Transfer client errors
#[derive(Debug)]
pub enum ClientError {
    /// The peer closed the connection where a response was expected.
    ConnectionClosed,
    /// The RETR size line did not parse as a decimal byte count. This is
    /// also what a RETR of a missing file looks like from the client side:
    /// the server sends its failure line where the size was expected.
    InvalidSizeLine(String),
    IoError(io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::ConnectionClosed => write!(f, "Connection closed by server"),
            ClientError::InvalidSizeLine(line) => {
                write!(f, "Received invalid file size: {:?}", line)
            }
            ClientError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<io::Error> for ClientError {
    fn from(error: io::Error) -> Self {
        ClientError::IoError(error)
    }
}

/// General error that encompasses all module error types.
#[derive(Debug)]
pub enum FerryError {
    Storage(StorageError),
    Client(ClientError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for FerryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FerryError::Storage(e) => write!(f, "Storage error: {}", e),
            FerryError::Client(e) => write!(f, "Client error: {}", e),
            FerryError::Config(e) => write!(f, "Configuration error: {}", e),
            FerryError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FerryError {}

impl From<StorageError> for FerryError {
    fn from(error: StorageError) -> Self {
        FerryError::Storage(error)
    }
}

impl From<ClientError> for FerryError {
    fn from(error: ClientError) -> Self {
        FerryError::Client(error)
    }
}

impl From<config::ConfigError> for FerryError {
    fn from(error: config::ConfigError) -> Self {
        FerryError::Config(error)
    }
}

impl From<io::Error> for FerryError {
    fn from(error: io::Error) -> Self {
        FerryError::IoError(error)
    }
}
