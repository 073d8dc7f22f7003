//! Filesystem capability consumed by the server.

pub mod operations;

pub use operations::{basename, change_directory, delete_file, list_directory, resolve_file};
