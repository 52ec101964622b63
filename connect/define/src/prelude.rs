//! Convenient re-exports for writing shape definitions.
//!
//! ## Examples
//!
//! ```
//! use connect_define::prelude::*;
//!
//! let config = ServiceConfig::new("eu-west-2");
//! assert_eq!(config.endpoint(), "https://connect.eu-west-2.amazonaws.com");
//! ```

pub use crate::config::ServiceConfig;
pub use crate::error::ConfigError;
pub use crate::number::Double;
pub use crate::shape::{Shape, ShapeRef};
pub use crate::soft_enum;
pub use crate::types::{Operation, RestMethod, ServiceApi};
