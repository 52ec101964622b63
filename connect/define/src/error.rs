//! Configuration errors.

use thiserror::Error;

/// Errors raised while resolving a [`ServiceConfig`](crate::ServiceConfig).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// None of the region variables was set.
    #[error("no region configured; set one of: {}", vars.join(", "))]
    MissingRegion {
        /// Variables consulted, in order.
        vars: Vec<String>,
    },

    /// The region does not look like `us-east-1`.
    #[error("invalid region '{0}'")]
    InvalidRegion(String),

    /// A boolean flag held something other than `true` or `false`.
    #[error("invalid value '{value}' for {var}; expected true or false")]
    InvalidFlag {
        /// The variable that was read.
        var: String,
        /// The value it held.
        value: String,
    },
}

impl ConfigError {
    /// Returns `true` if the error is caused by an absent setting rather than a bad one.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingRegion { .. })
    }
}
