//! Error types for the transfer service.

pub mod types;

pub use types::{ClientError, FerryError, StorageError};
