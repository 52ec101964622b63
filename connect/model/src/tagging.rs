//! Resource tagging.
//!
//! These operations predate the PascalCase convention of the rest of the
//! service; their members travel in camelCase.

use std::collections::BTreeMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Adds tags to a resource.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "camelCase")]
pub struct TagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TagResourceResponse {}

/// Removes tags from a resource by key.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UntagResourceResponse {}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl_shape! {
    TagResourceRequest,
    TagResourceResponse,
    UntagResourceRequest,
    UntagResourceResponse,
    ListTagsForResourceRequest,
    ListTagsForResourceResponse,
}

map_entries! {
    TagResourceRequest {
        tags: add_tags_entry / clear_tags_entries => String,
    }
}

map_entries! {
    ListTagsForResourceResponse {
        tags: add_tags_entry / clear_tags_entries => String,
    }
}

sequence_items! {
    UntagResourceRequest {
        tag_keys: add_tag_keys_item => String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_are_camel_case() {
        let mut request = TagResourceRequest {
            resource_arn: Some("arn:aws:connect:us-east-1:123456789012:instance/i-1".to_string()),
            ..Default::default()
        };
        request.add_tags_entry("env", "prod").unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert!(json["resourceArn"].is_string());
        assert_eq!(json["tags"]["env"], "prod");

        let untag = UntagResourceRequestBuilder::default()
            .tag_keys(vec!["env".to_string()])
            .build()
            .unwrap();
        assert_eq!(serde_json::to_string(&untag).unwrap(), r#"{"tagKeys":["env"]}"#);
    }

    #[test]
    fn list_response_entries() {
        let mut response: ListTagsForResourceResponse =
            serde_json::from_str(r#"{"tags":{"owner":"ops"}}"#).unwrap();
        assert!(response.add_tags_entry("owner", "dev").is_err());
        response.add_tags_entry("cost-center", "42").unwrap();
        assert_eq!(response.tags.as_ref().unwrap().len(), 2);
        assert_eq!(response.to_string(), "{Tags: {cost-center: 42, owner: ops}}");
    }

    #[test]
    fn display_capitalizes_member_names() {
        let request = UntagResourceRequest {
            resource_arn: Some("arn:q".to_string()),
            tag_keys: Some(vec!["env".to_string()]),
        };
        assert_eq!(request.to_string(), "{ResourceArn: arn:q, TagKeys: [env]}");
    }
}
