//! Error types for triegen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for triegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the input and output adapters.
///
/// Building and compressing a trie cannot fail; every variant here comes from
/// reading the word list or writing the serialized tree.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
}
