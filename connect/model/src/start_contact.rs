//! Requests that start voice, chat and task contacts.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::contact::SegmentAttributeValue;
use crate::enums::{ReferenceType, RehydrationType, TrafficType};
use crate::error::ModelError;

/// A link or value shown to the agent alongside a contact.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Reference {
    /// The reference value, interpreted according to its type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<ReferenceType>,
}

impl Reference {
    /// Creates a reference of the given type.
    pub fn new(reference_type: impl Into<ReferenceType>, value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            reference_type: Some(reference_type.into()),
        }
    }
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct ParticipantDetails {
    /// Name shown to the other chat participants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// A chat message.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct ChatMessage {
    /// `text/plain`, `text/markdown`, `application/json` and similar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Continues a past chat session in a new contact.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct PersistentChat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rehydration_type: Option<RehydrationType>,
    /// The contact whose transcript is restored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_contact_id: Option<String>,
}

/// Answering machine detection for campaign calls.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AnswerMachineDetectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_answer_machine_detection: Option<bool>,
    /// Wait for the answering machine prompt before connecting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub await_answer_machine_prompt: Option<bool>,
}

/// Places an outbound call to a customer.
///
/// ## Examples
///
/// ```
/// use connect_model::enums::ReferenceType;
/// use connect_model::start_contact::{Reference, StartOutboundVoiceContactRequest};
///
/// let mut request = StartOutboundVoiceContactRequest {
///     instance_id: Some("i-1".to_string()),
///     destination_phone_number: Some("+12065550100".to_string()),
///     ..Default::default()
/// };
/// request
///     .add_attributes_entry("customerTier", "gold")
///     .unwrap()
///     .add_references_entry("crm", Reference::new(ReferenceType::Url, "https://crm.example.com/1"))
///     .unwrap();
///
/// assert!(request.add_attributes_entry("customerTier", "silver").is_err());
/// ```
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct StartOutboundVoiceContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<BTreeMap<String, Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_contact_id: Option<String>,
    /// E.164 number to call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_flow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Idempotency token, valid for 7 days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_phone_number: Option<String>,
    /// Queue used when no source number is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_id: Option<String>,
    /// Flow attributes (up to 32 KB in total).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_machine_detection_config: Option<AnswerMachineDetectionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_type: Option<TrafficType>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct StartOutboundVoiceContactResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

/// Starts a chat between a customer and the contact center.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct StartChatContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_flow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_details: Option<ParticipantDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_message: Option<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Total chat duration, 60 to 10080 minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_duration_in_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_messaging_content_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_chat: Option<PersistentChat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_attributes: Option<BTreeMap<String, SegmentAttributeValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct StartChatContactResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<String>,
    /// Token used to create the participant's connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continued_from_contact_id: Option<String>,
}

/// Starts a task contact, optionally scheduled for later.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct StartTaskContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_flow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<BTreeMap<String, Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// When the task becomes routable; up to six days ahead.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub scheduled_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_connect_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_attributes: Option<BTreeMap<String, SegmentAttributeValue>>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct StartTaskContactResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

impl_shape! {
    Reference,
    ParticipantDetails,
    ChatMessage,
    PersistentChat,
    AnswerMachineDetectionConfig,
    StartOutboundVoiceContactRequest,
    StartOutboundVoiceContactResponse,
    StartChatContactRequest,
    StartChatContactResponse,
    StartTaskContactRequest,
    StartTaskContactResponse,
}

map_entries! {
    StartOutboundVoiceContactRequest {
        attributes: add_attributes_entry / clear_attributes_entries => String,
        references: add_references_entry / clear_references_entries => Reference,
    }
}

map_entries! {
    StartChatContactRequest {
        attributes: add_attributes_entry / clear_attributes_entries => String,
        segment_attributes: add_segment_attributes_entry / clear_segment_attributes_entries
            => SegmentAttributeValue,
    }
}

map_entries! {
    StartTaskContactRequest {
        attributes: add_attributes_entry / clear_attributes_entries => String,
        references: add_references_entry / clear_references_entries => Reference,
        segment_attributes: add_segment_attributes_entry / clear_segment_attributes_entries
            => SegmentAttributeValue,
    }
}

sequence_items! {
    StartChatContactRequest {
        supported_messaging_content_types: add_supported_messaging_content_types_item => String,
    }
}
