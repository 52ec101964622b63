//! Amazon Connect Model
//!
//! Request, response and entity shapes of the Amazon Connect contact-center
//! API, built on the primitives of `connect-define`, plus the catalog of the
//! operations that exchange them.
//!
//! Every shape is a passive container: all members are optional public
//! fields, nothing is validated, and equality and hashing cover every
//! member. Shapes can be assembled by field assignment or through their
//! derived `*Builder`, and display as `{Name: value, ...}` for diagnostics.
//!
//! ## Modules
//!
//! - [`contact`] - `Contact` and the describe/stop/attribute operations
//! - [`routing`] - Routing criteria attached to a contact
//! - [`start_contact`] - Outbound voice, chat and task contacts
//! - [`webrtc`] - In-app, web and video calls
//! - [`persistent_contact`] - Persistent chat associations
//! - [`metrics`] - Historical and current queue metrics
//! - [`metrics_v2`] - Resource metrics of the second generation API
//! - [`traffic_distribution`] - Traffic distribution groups
//! - [`storage`] - Instance storage configurations
//! - [`tagging`] - Resource tags
//! - [`enums`] - Documented value sets
//!
//! ## Examples
//!
//! ```
//! use connect_model::contact::{Contact, ContactBuilder};
//! use connect_model::enums::Channel;
//!
//! let built = ContactBuilder::default()
//!     .id("c-1")
//!     .channel("VOICE")
//!     .build()
//!     .unwrap();
//!
//! let mut assigned = Contact::default();
//! assigned.id = Some("c-1".to_string());
//! assigned.channel = Some(Channel::Voice);
//!
//! assert_eq!(built, assigned);
//! ```

#[macro_use]
mod describe;
#[macro_use]
mod entries;

pub mod contact;
pub mod enums;
pub mod error;
pub mod metrics;
pub mod metrics_v2;
pub mod operations;
pub mod persistent_contact;
pub mod prelude;
pub mod routing;
pub mod start_contact;
pub mod storage;
pub mod tagging;
pub mod traffic_distribution;
pub mod webrtc;

// Re-export the most used items at crate root
pub use contact::Contact;
pub use error::ModelError;
pub use operations::define_connect_api;
pub use storage::InstanceStorageConfig;
pub use traffic_distribution::TrafficDistributionGroup;
