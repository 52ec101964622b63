//! Core types for the service definition.
//!
//! - [`ServiceApi`] - The service metadata and operation list
//! - [`Operation`] - Individual REST operation definitions
//! - [`RestMethod`] - HTTP method enumeration

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::config::ServiceConfig;
use crate::shape::ShapeRef;

/// HTTP methods used by the service's REST binding.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use connect_define::RestMethod;
///
/// assert_eq!(RestMethod::from_str("PUT").unwrap(), RestMethod::Put);
/// assert_eq!(RestMethod::Delete.to_string(), "DELETE");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Read a resource
    Get,
    /// Run an action or query
    Post,
    /// Create a resource or start a contact
    Put,
    /// Partially update a resource
    Patch,
    /// Remove a resource or association
    Delete,
}

/// The service definition: metadata plus every modeled operation.
///
/// ## Examples
///
/// ```
/// use connect_define::{Operation, RestMethod, ServiceApi, ServiceConfig, ShapeRef};
///
/// let api = ServiceApi {
///     name: "Amazon Connect".to_string(),
///     endpoint_prefix: "connect".to_string(),
///     api_version: "2017-08-08".to_string(),
///     protocol: "rest-json".to_string(),
///     docs_url: None,
///     operations: vec![Operation {
///         name: "StopContact".to_string(),
///         method: RestMethod::Post,
///         path: "/contact/stop".to_string(),
///         description: "Ends the specified contact".to_string(),
///         input: ShapeRef::named("StopContactRequest"),
///         output: ShapeRef::named("StopContactResponse"),
///     }],
/// };
///
/// assert!(api.operation("StopContact").is_some());
/// assert_eq!(
///     api.endpoint(&ServiceConfig::new("us-west-2")),
///     "https://connect.us-west-2.amazonaws.com"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceApi {
    /// Human-readable service name.
    pub name: String,
    /// Host prefix used to build regional endpoints (e.g., "connect").
    pub endpoint_prefix: String,
    /// API version of the service definition.
    pub api_version: String,
    /// Wire protocol of the service (e.g., "rest-json").
    pub protocol: String,
    /// Link to the API reference (optional).
    pub docs_url: Option<String>,
    /// All modeled operations.
    pub operations: Vec<Operation>,
}

impl ServiceApi {
    /// Looks up an operation by name.
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Returns the endpoint this service is reached at for `config`.
    pub fn endpoint(&self, config: &ServiceConfig) -> String {
        config.endpoint_for(&self.endpoint_prefix)
    }
}

/// A single REST operation.
///
/// URI templates use curly-brace placeholders named after the input member
/// that fills them: `/contacts/{InstanceId}/{ContactId}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Operation name (PascalCase, e.g. "StartChatContact").
    pub name: String,
    /// HTTP method.
    pub method: RestMethod,
    /// URI template relative to the service endpoint.
    pub path: String,
    /// What the operation does.
    pub description: String,
    /// Input shape.
    pub input: ShapeRef,
    /// Output shape.
    pub output: ShapeRef,
}

impl Operation {
    /// Returns the placeholder names of the URI template, in order.
    pub fn path_params(&self) -> Vec<&str> {
        let mut params = Vec::new();
        let mut rest = self.path.as_str();
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    params.push(&after[..close]);
                    rest = &after[close + 1..];
                }
                None => break,
            }
        }
        params
    }
}
