//! Contacts and the operations that read or end them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use connect_define::Double;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::enums::{
    AnsweringMachineDetectionStatus, Channel, ContactInitiationMethod, ScreenShareCapability,
    VideoCapability,
};
use crate::error::ModelError;
use crate::routing::RoutingCriteria;

/// A contact: one customer interaction on any channel.
///
/// ## Examples
///
/// ```
/// use connect_model::contact::ContactBuilder;
/// use connect_model::enums::Channel;
///
/// let contact = ContactBuilder::default()
///     .id("c-1")
///     .channel(Channel::Voice)
///     .total_pause_count(2)
///     .build()
///     .unwrap();
///
/// let text = contact.to_string();
/// assert!(text.contains("Id: c-1"));
/// assert!(text.contains("Channel: VOICE"));
/// ```
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    /// The Amazon Resource Name of the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The identifier of the contact (1-256 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Identifier of the first contact in a chain of transfers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_contact_id: Option<String>,
    /// Identifier of the contact this one was transferred from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiation_method: Option<ContactInitiationMethod>,
    /// The name of the contact (up to 512 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The description of the contact (up to 4096 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    /// Queue the contact is in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_info: Option<QueueInfo>,
    /// Agent who accepted the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_info: Option<AgentInfo>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub initiation_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub disconnect_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub last_update_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub last_paused_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub last_resumed_timestamp: Option<DateTime<Utc>>,
    /// Times the contact was paused (0-10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pause_count: Option<i32>,
    /// Total seconds spent paused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pause_duration_in_seconds: Option<i32>,
    /// When a scheduled task becomes active.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub scheduled_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wisdom_info: Option<WisdomInfo>,
    /// Seconds added to (or removed from) the contact's time in queue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_time_adjustment_seconds: Option<i32>,
    /// Queue priority; lower values are routed first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_priority: Option<i64>,
    /// Resource tags (up to 200 pairs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub connected_to_system_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_criteria: Option<RoutingCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<Campaign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answering_machine_detection_status: Option<AnsweringMachineDetectionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_voice_activity: Option<CustomerVoiceActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_metrics: Option<QualityMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disconnect_details: Option<DisconnectDetails>,
    /// System-defined attributes keyed by name (e.g. `connect:Subtype`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_attributes: Option<BTreeMap<String, SegmentAttributeValue>>,
}

/// The queue a contact was placed in.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct QueueInfo {
    /// The unique identifier of the queue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// When the contact entered the queue.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub enqueue_timestamp: Option<DateTime<Utc>>,
}

/// The agent handling a contact.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AgentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub connected_to_agent_timestamp: Option<DateTime<Utc>>,
    /// Seconds the agent spent paused on this contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_pause_duration_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_groups: Option<HierarchyGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<DeviceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ParticipantCapabilities>,
}

/// The five levels of an agent hierarchy.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyGroups {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level1: Option<AgentHierarchyGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level2: Option<AgentHierarchyGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level3: Option<AgentHierarchyGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level4: Option<AgentHierarchyGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level5: Option<AgentHierarchyGroup>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AgentHierarchyGroup {
    /// The Amazon Resource Name of the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

/// The device a participant connected from.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct DeviceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
}

/// Media a participant may send.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct ParticipantCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoCapability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_share: Option<ScreenShareCapability>,
}

/// The Amazon Q in Connect session attached to a contact.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct WisdomInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_arn: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<DeviceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ParticipantCapabilities>,
}

/// The outbound campaign that produced a contact.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Campaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
}

/// When the customer's greeting started and ended on an outbound call.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct CustomerVoiceActivity {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub greeting_start_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub greeting_end_timestamp: Option<DateTime<Utc>>,
}

/// Audio quality of both sides of a voice contact.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct QualityMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentQualityMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerQualityMetrics>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AgentQualityMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioQualityMetricsInfo>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct CustomerQualityMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioQualityMetricsInfo>,
}

/// Audio quality score for one participant.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AudioQualityMetricsInfo {
    /// Score from 1 (poor) to 5 (excellent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<Double>,
    /// Likely causes of poor audio, such as `HighPacketLoss`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_quality_issues: Option<Vec<String>>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct DisconnectDetails {
    /// Probable cause of an unexpected disconnect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_disconnect_issue: Option<String>,
}

/// Value of a segment attribute.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct SegmentAttributeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,
}

impl SegmentAttributeValue {
    /// Creates a string-valued attribute.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            value_string: Some(value.into()),
        }
    }
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeContactResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

/// Ends a contact.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct StopContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Only honored for email contacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disconnect_reason: Option<DisconnectReason>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct DisconnectReason {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct StopContactResponse {}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct GetContactAttributesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_contact_id: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct GetContactAttributesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

/// Creates or replaces user-defined attributes on a contact.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct UpdateContactAttributesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Attributes to set; existing keys not listed here are kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UpdateContactAttributesResponse {}

impl_shape! {
    Contact,
    QueueInfo,
    AgentInfo,
    HierarchyGroups,
    AgentHierarchyGroup,
    DeviceInfo,
    ParticipantCapabilities,
    WisdomInfo,
    Customer,
    Campaign,
    CustomerVoiceActivity,
    QualityMetrics,
    AgentQualityMetrics,
    CustomerQualityMetrics,
    AudioQualityMetricsInfo,
    DisconnectDetails,
    SegmentAttributeValue,
    DescribeContactRequest,
    DescribeContactResponse,
    StopContactRequest,
    DisconnectReason,
    StopContactResponse,
    GetContactAttributesRequest,
    GetContactAttributesResponse,
    UpdateContactAttributesRequest,
    UpdateContactAttributesResponse,
}

map_entries! {
    Contact {
        tags: add_tags_entry / clear_tags_entries => String,
        segment_attributes: add_segment_attributes_entry / clear_segment_attributes_entries
            => SegmentAttributeValue,
    }
}

map_entries! {
    GetContactAttributesResponse {
        attributes: add_attributes_entry / clear_attributes_entries => String,
    }
}

map_entries! {
    UpdateContactAttributesRequest {
        attributes: add_attributes_entry / clear_attributes_entries => String,
    }
}

sequence_items! {
    AudioQualityMetricsInfo {
        potential_quality_issues: add_potential_quality_issues_item => String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_define::Shape;

    #[test]
    fn wire_names_are_pascal_case() {
        let contact = Contact {
            id: Some("c-1".to_string()),
            total_pause_duration_in_seconds: Some(30),
            queue_info: Some(QueueInfo {
                id: Some("q-1".to_string()),
                enqueue_timestamp: DateTime::from_timestamp(1_700_000_000, 0),
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["Id"], "c-1");
        assert_eq!(json["TotalPauseDurationInSeconds"], 30);
        assert_eq!(json["QueueInfo"]["EnqueueTimestamp"], 1_700_000_000);
        assert!(json.get("Arn").is_none());
    }

    #[test]
    fn describe_contact_response_parses() {
        let body = r#"{
            "Contact": {
                "Arn": "arn:aws:connect:us-east-1:123456789012:instance/i-1/contact/c-1",
                "Id": "c-1",
                "InitiationMethod": "INBOUND",
                "Channel": "VOICE",
                "InitiationTimestamp": 1700000000.5,
                "TotalPauseCount": 1,
                "QueuePriority": 5,
                "AgentInfo": {
                    "Id": "a-1",
                    "HierarchyGroups": { "Level1": { "Arn": "arn:group:1" } },
                    "Capabilities": { "Video": "SEND" }
                },
                "QualityMetrics": {
                    "Agent": { "Audio": { "QualityScore": 4.5, "PotentialQualityIssues": ["HighPacketLoss"] } }
                },
                "SegmentAttributes": { "connect:Subtype": { "ValueString": "connect:Chat" } },
                "SomethingNew": true
            }
        }"#;

        let response: DescribeContactResponse = serde_json::from_str(body).unwrap();
        let contact = response.contact.unwrap();
        assert_eq!(contact.initiation_method, Some(ContactInitiationMethod::Inbound));
        assert_eq!(contact.channel, Some(Channel::Voice));
        assert_eq!(
            contact.initiation_timestamp.unwrap().timestamp_subsec_millis(),
            500
        );
        assert_eq!(contact.queue_priority, Some(5));

        let agent = contact.agent_info.unwrap();
        assert_eq!(
            agent.hierarchy_groups.unwrap().level1.unwrap().arn.as_deref(),
            Some("arn:group:1")
        );
        assert_eq!(agent.capabilities.unwrap().video, Some(VideoCapability::Send));

        let audio = contact.quality_metrics.unwrap().agent.unwrap().audio.unwrap();
        assert_eq!(audio.quality_score, Some(Double(4.5)));

        let segments = contact.segment_attributes.unwrap();
        assert_eq!(
            segments["connect:Subtype"].value_string.as_deref(),
            Some("connect:Chat")
        );
    }

    #[test]
    fn setters_do_not_validate() {
        let mut contact = Contact::default();
        contact.total_pause_count = Some(99);
        contact.id = Some(String::new());
        assert_eq!(contact.total_pause_count, Some(99));
        contact.total_pause_count = None;
        assert!(contact.total_pause_count.is_none());
    }

    #[test]
    fn builder_accepts_enum_or_wire_string() {
        let from_enum = ContactBuilder::default()
            .channel(Channel::Chat)
            .build()
            .unwrap();
        let from_str = ContactBuilder::default().channel("CHAT").build().unwrap();
        assert_eq!(from_enum, from_str);
    }

    #[test]
    fn segment_attribute_entries_reject_duplicates() {
        let mut contact = Contact::default();
        contact
            .add_segment_attributes_entry("connect:Subtype", SegmentAttributeValue::string("connect:Chat"))
            .unwrap();
        let err = contact
            .add_segment_attributes_entry("connect:Subtype", SegmentAttributeValue::string("connect:SMS"))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                shape: "Contact",
                field: "segment_attributes",
                key: "connect:Subtype".to_string(),
            }
        );
    }

    #[test]
    fn empty_responses_round_trip() {
        let parsed: StopContactResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, StopContactResponse {});
        assert_eq!(StopContactResponse {}.to_string(), "{}");
        assert_eq!(StopContactResponse::SHAPE_NAME, "StopContactResponse");
    }

    #[test]
    fn nested_shape_names() {
        assert_eq!(AudioQualityMetricsInfo::SHAPE_NAME, "AudioQualityMetricsInfo");
        assert_eq!(Contact::shape_ref().shape_name, "Contact");
    }
}
