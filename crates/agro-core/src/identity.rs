use std::fmt;
use std::hash::{Hash, Hasher};

use schemars::JsonSchema;
use serde::Serialize;

use crate::errors::CoreError;

/// Identity code of an equipment record (e.g. `"MS-001"`).
///
/// The original spelling is kept for display. Equality and hashing fold case,
/// so `"ms-001"` and `"MS-001"` name the same record.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct EquipmentCode(String);

impl EquipmentCode {
    /// Build a code from user or seed input. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the code is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(
                "equipment code must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw lookup key.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        fold(&self.0) == fold(other.trim())
    }
}

fn fold(value: &str) -> String {
    value.to_lowercase()
}

impl PartialEq for EquipmentCode {
    fn eq(&self, other: &Self) -> bool {
        fold(&self.0) == fold(&other.0)
    }
}

impl Eq for EquipmentCode {}

impl Hash for EquipmentCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fold(&self.0).hash(state);
    }
}

impl fmt::Display for EquipmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
