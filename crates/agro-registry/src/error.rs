//! Registry error types for agro-registry.

use agro_core::enums::Capability;
use agro_core::errors::CoreError;
use thiserror::Error;

/// Errors from operations keyed by an equipment code.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// No record carries the requested code. Informational, not a fault.
    #[error("No equipment found with code {0}")]
    UnknownCode(String),

    /// The record exists but its kind does not fulfill the capability.
    #[error("Equipment {code} does not support the {capability} capability")]
    MissingCapability { code: String, capability: Capability },

    /// Record construction or mutation rejected by the core model.
    #[error(transparent)]
    Core(#[from] CoreError),
}
