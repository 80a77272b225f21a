//! Error types for huffcode.

use thiserror::Error;

/// Error variants for building a Huffman coding.
#[derive(Debug, Error)]
pub enum Error {
    /// The source sequence cannot be coded (e.g., it is empty).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Reading the source sequence failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for huffcode operations.
pub type Result<T> = std::result::Result<T, Error>;
