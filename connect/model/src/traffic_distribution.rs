//! Traffic distribution groups: instances replicated across regions.

use std::collections::BTreeMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::enums::TrafficDistributionGroupStatus;
use crate::error::ModelError;

/// A group of replicated instances that share telephony traffic.
///
/// ## Examples
///
/// ```
/// use connect_model::traffic_distribution::TrafficDistributionGroup;
///
/// let mut group = TrafficDistributionGroup::default();
/// group.add_tags_entry("team", "voice").unwrap();
/// assert!(group.add_tags_entry("team", "chat").is_err());
///
/// group.clear_tags_entries();
/// assert!(group.tags.is_none());
/// group.add_tags_entry("team", "chat").unwrap();
/// ```
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct TrafficDistributionGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Name of the group (1-128 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ARN of the primary instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrafficDistributionGroupStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    /// The default group is created with the replica and cannot be deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrafficDistributionGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifier or ARN of the instance the group is created in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrafficDistributionGroupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTrafficDistributionGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_distribution_group_id: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTrafficDistributionGroupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_distribution_group: Option<TrafficDistributionGroup>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTrafficDistributionGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_distribution_group_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DeleteTrafficDistributionGroupResponse {}

impl_shape! {
    TrafficDistributionGroup,
    CreateTrafficDistributionGroupRequest,
    CreateTrafficDistributionGroupResponse,
    DescribeTrafficDistributionGroupRequest,
    DescribeTrafficDistributionGroupResponse,
    DeleteTrafficDistributionGroupRequest,
    DeleteTrafficDistributionGroupResponse,
}

map_entries! {
    TrafficDistributionGroup {
        tags: add_tags_entry / clear_tags_entries => String,
    }
}

map_entries! {
    CreateTrafficDistributionGroupRequest {
        tags: add_tags_entry / clear_tags_entries => String,
    }
}
