//! # Error Types
//!
//! This module defines error types used throughout the pclforge library.
//!
//! The escape-sequence builders in [`crate::protocol`] are pure formatters
//! and never fail; errors here come from the stream scanner, the soft-font
//! decode driver, and file I/O in the CLI.

use thiserror::Error;

/// Main error type for pclforge operations
#[derive(Debug, Error)]
pub enum PclError {
    /// Stream scanning errors (malformed escape-sequence framing)
    #[error("Scan error: {0}")]
    Scan(String),

    /// Invalid command or parameter
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Soft-font decode driver errors (caller contract violations)
    #[error("Decode error: {0}")]
    Decode(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
