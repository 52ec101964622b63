//! The contract shared by every request, response and entity shape.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A named structure from the service definition.
///
/// Shapes are passive containers: every member is optional, nothing is
/// validated, and two shapes are equal when every member is equal.
///
/// ## Required Bounds
///
/// - `Serialize + DeserializeOwned` - Wire form
/// - `Debug + Display` - Diagnostics (`Display` lists present members only)
/// - `Clone + Default` - Built empty, filled member by member
/// - `Eq + Hash` - Structural equality over every member
/// - `Send + Sync + 'static` - Usable from async transports
///
/// ## Examples
///
/// ```
/// use std::fmt;
/// use serde::{Deserialize, Serialize};
/// use connect_define::Shape;
///
/// #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// struct Campaign {
///     campaign_id: Option<String>,
/// }
///
/// impl fmt::Display for Campaign {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{:?}", self.campaign_id)
///     }
/// }
///
/// impl Shape for Campaign {
///     const SHAPE_NAME: &'static str = "Campaign";
/// }
///
/// assert_eq!(Campaign::shape_ref().shape_name, "Campaign");
/// ```
pub trait Shape:
    Serialize
    + DeserializeOwned
    + Debug
    + Display
    + Clone
    + Default
    + Eq
    + Hash
    + Send
    + Sync
    + 'static
{
    /// Name of this shape in the service definition.
    const SHAPE_NAME: &'static str;

    /// Returns a reference to this shape for use in an [`Operation`](crate::Operation).
    fn shape_ref() -> ShapeRef {
        ShapeRef {
            shape_name: Self::SHAPE_NAME.to_string(),
            type_path: Some(std::any::type_name::<Self>().to_string()),
        }
    }
}

/// Reference from an operation to its input or output shape.
///
/// Stores the service-definition name and, when known, the Rust type path
/// that models it.
///
/// ## Examples
///
/// ```
/// use connect_define::ShapeRef;
///
/// let shape = ShapeRef::named("StopContactRequest");
/// assert_eq!(shape.shape_name, "StopContactRequest");
/// assert_eq!(shape.full_path(), "StopContactRequest");
///
/// let shape = ShapeRef::with_path("StopContactRequest", "connect_model::contact::StopContactRequest");
/// assert_eq!(shape.full_path(), "connect_model::contact::StopContactRequest");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeRef {
    /// Shape name in the service definition (e.g., "StartChatContactRequest").
    pub shape_name: String,
    /// Fully qualified Rust type modelling the shape.
    pub type_path: Option<String>,
}

impl ShapeRef {
    /// Creates a reference by shape name only.
    pub fn named(shape_name: impl Into<String>) -> Self {
        Self {
            shape_name: shape_name.into(),
            type_path: None,
        }
    }

    /// Creates a reference with the Rust type path attached.
    pub fn with_path(shape_name: impl Into<String>, type_path: impl Into<String>) -> Self {
        Self {
            shape_name: shape_name.into(),
            type_path: Some(type_path.into()),
        }
    }

    /// Returns the Rust type path if known, otherwise the shape name.
    pub fn full_path(&self) -> &str {
        self.type_path.as_deref().unwrap_or(&self.shape_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fmt;

    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    struct Sample {
        value: Option<String>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("sample")
        }
    }

    impl Shape for Sample {
        const SHAPE_NAME: &'static str = "SampleShape";
    }

    #[test]
    fn shape_ref_carries_name_and_type_path() {
        let shape = Sample::shape_ref();
        assert_eq!(shape.shape_name, "SampleShape");
        assert!(shape.full_path().ends_with("Sample"));
        assert!(shape.full_path().contains("::"));
    }

    #[test]
    fn named_ref_falls_back_to_shape_name() {
        let shape = ShapeRef::named("Contact");
        assert!(shape.type_path.is_none());
        assert_eq!(shape.full_path(), "Contact");
    }
}
