//! Cross-cutting error types for voxtask.
//!
//! Domain-specific errors (`ParserError`, `ConfigError`) are defined in their
//! respective crates. `anyhow` is only used at the binary edge.

use thiserror::Error;

/// Errors that can be raised by any voxtask crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (empty trigger phrases, malformed tables).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
