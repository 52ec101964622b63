//! Error types for the Amazon Connect model.

use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// Errors raised while assembling shapes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A map entry helper was given a key the map already holds.
    ///
    /// The map is left exactly as it was before the call.
    #[error("Duplicate key '{key}' in {shape}.{field}")]
    DuplicateKey {
        /// Shape that owns the map.
        shape: &'static str,
        /// Map member the entry was added to.
        field: &'static str,
        /// The rejected key.
        key: String,
    },

    /// A builder was asked to produce a shape with a required member unset.
    #[error("Field not initialized: {0}")]
    UninitializedField(&'static str),
}

impl From<UninitializedFieldError> for ModelError {
    fn from(err: UninitializedFieldError) -> Self {
        Self::UninitializedField(err.field_name())
    }
}
