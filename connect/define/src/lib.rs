//! Amazon Connect Definition Library
//!
//! This crate provides the primitives the Amazon Connect model is written
//! with: the soft-enum generator, numeric and timestamp wire helpers, the
//! [`Shape`] contract, and the types that describe the REST operations of
//! the service.
//!
//! ## Core Types
//!
//! ### Shape Primitives
//!
//! - [`soft_enum!`] - Generates a closed value set that keeps unknown values
//! - [`Double`] - Floating point value with bitwise equality and hashing
//! - [`timestamp`] - Epoch-second (de)serialization for instants
//! - [`Shape`] - Contract every request, response and entity type satisfies
//! - [`ShapeRef`] - Reference to a shape inside an operation definition
//!
//! ### Service Types
//!
//! - [`ServiceApi`] - Service metadata plus all modeled operations
//! - [`Operation`] - A single REST operation with method, URI and shapes
//! - [`RestMethod`] - HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`ServiceConfig`] - Region and endpoint resolution
//!
//! ## Examples
//!
//! ```
//! use connect_define::{Operation, RestMethod, ShapeRef};
//!
//! let op = Operation {
//!     name: "DescribeContact".to_string(),
//!     method: RestMethod::Get,
//!     path: "/contacts/{InstanceId}/{ContactId}".to_string(),
//!     description: "Describes the specified contact".to_string(),
//!     input: ShapeRef::named("DescribeContactRequest"),
//!     output: ShapeRef::named("DescribeContactResponse"),
//! };
//!
//! assert_eq!(op.path_params(), vec!["InstanceId", "ContactId"]);
//! ```
//!
//! ## Shape Definitions
//!
//! The actual Amazon Connect shapes live in the separate `connect-model`
//! crate, which builds on these primitives.

pub mod config;
pub mod error;
pub mod macros;
pub mod number;
pub mod prelude;
pub mod shape;
pub mod timestamp;
pub mod types;

// Re-export main types at crate root
pub use config::ServiceConfig;
pub use error::ConfigError;
pub use number::Double;
pub use shape::{Shape, ShapeRef};
pub use types::{Operation, RestMethod, ServiceApi};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
