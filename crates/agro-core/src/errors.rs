//! Cross-cutting error types for the equipment model.
//!
//! Registry-level errors (unknown codes, missing capabilities) live in
//! `agro-registry`. The CLI converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors raised while building or mutating equipment records.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Data failed validation (empty code, negative or non-finite power draw).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation is not defined for this kind of equipment.
    #[error("Operation '{operation}' is not supported by {kind}")]
    Unsupported {
        kind: &'static str,
        operation: &'static str,
    },
}
