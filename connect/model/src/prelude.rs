//! Convenient re-exports for working with the model.
//!
//! ## Examples
//!
//! ```
//! use connect_model::prelude::*;
//!
//! let api = define_connect_api();
//! let op = api.operation("StartChatContact").unwrap();
//! assert_eq!(op.input.shape_name, StartChatContactRequest::SHAPE_NAME);
//! ```

pub use connect_define::{Double, Operation, RestMethod, ServiceApi, ServiceConfig, Shape};

pub use crate::contact::*;
pub use crate::enums::*;
pub use crate::error::ModelError;
pub use crate::metrics::*;
pub use crate::metrics_v2::*;
pub use crate::operations::define_connect_api;
pub use crate::persistent_contact::*;
pub use crate::routing::*;
pub use crate::start_contact::*;
pub use crate::storage::*;
pub use crate::tagging::*;
pub use crate::traffic_distribution::*;
pub use crate::webrtc::*;
