//! Persistent chat associations created after a contact has ended.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::enums::RehydrationType;
use crate::error::ModelError;

/// Links a past chat to a new contact so its transcript carries over.
///
/// ## Examples
///
/// ```
/// use connect_model::enums::RehydrationType;
/// use connect_model::persistent_contact::CreatePersistentContactAssociationRequestBuilder;
///
/// let request = CreatePersistentContactAssociationRequestBuilder::default()
///     .instance_id("i-1")
///     .initial_contact_id("c-2")
///     .rehydration_type(RehydrationType::FromSegment)
///     .source_contact_id("c-1")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.rehydration_type.unwrap().as_str(), "FROM_SEGMENT");
/// ```
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct CreatePersistentContactAssociationRequest {
    /// The identifier of the Amazon Connect instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// The contact the association is created for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_contact_id: Option<String>,
    /// `ENTIRE_PAST_SESSION` restores the whole chain of past chats ending
    /// at the source contact; `FROM_SEGMENT` restores from the source
    /// contact onwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rehydration_type: Option<RehydrationType>,
    /// The contact from which the past chat is restored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_contact_id: Option<String>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct CreatePersistentContactAssociationResponse {
    /// The contact the new association continues from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continued_from_contact_id: Option<String>,
}

impl_shape! {
    CreatePersistentContactAssociationRequest,
    CreatePersistentContactAssociationResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn unknown_rehydration_type_survives() {
        let body = r#"{"InstanceId":"i-1","RehydrationType":"LAST_HOUR"}"#;
        let request: CreatePersistentContactAssociationRequest = serde_json::from_str(body).unwrap();
        assert_eq!(
            request.rehydration_type,
            Some(RehydrationType::Unknown("LAST_HOUR".to_string()))
        );
        assert_eq!(serde_json::to_string(&request).unwrap(), body);
    }

    #[test]
    fn equal_requests_hash_equally() {
        let a = CreatePersistentContactAssociationRequest {
            instance_id: Some("i-1".to_string()),
            source_contact_id: Some("c-1".to_string()),
            ..Default::default()
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.client_token = Some("token".to_string());
        assert_ne!(a, b);
    }
}
