//! Error types for the modalpha library.

use thiserror::Error;

/// Errors produced by the modalpha library.
///
/// All variants are caller input errors: validation happens before any
/// transform, and no partial output is produced on failure. Each variant
/// carries a human-readable message naming what was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Key text is empty or contains a character outside the alphabet.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// Text passed to encrypt is empty or contains a character outside the alphabet.
    #[error("invalid plain text: {0}")]
    InvalidPlainText(String),
    /// Text passed to decrypt is empty or contains a character outside the alphabet.
    #[error("invalid cipher text: {0}")]
    InvalidCipherText(String),
}
