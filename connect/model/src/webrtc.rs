//! In-app, web and video calling contacts.

use std::collections::BTreeMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::contact::ParticipantCapabilities;
use crate::enums::MeetingFeatureStatus;
use crate::error::ModelError;
use crate::start_contact::{ParticipantDetails, Reference};

/// Places a WebRTC contact between a customer and an agent.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct StartWebRtcContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_flow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Media each side may send; audio is always allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_capabilities: Option<AllowedCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_details: Option<ParticipantDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<BTreeMap<String, Reference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct StartWebRtcContactResponse {
    /// What the customer's client needs to join the meeting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_data: Option<ConnectionData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_token: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AllowedCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<ParticipantCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<ParticipantCapabilities>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee: Option<Attendee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting: Option<Meeting>,
}

/// A meeting attendee.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Attendee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_id: Option<String>,
    /// Token the attendee's client authenticates with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_token: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Meeting {
    /// AWS region hosting the media (e.g., "us-east-1").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_placement: Option<MediaPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_features: Option<MeetingFeaturesConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
}

/// Endpoints of the meeting's media services.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct MediaPlacement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_host_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_fallback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signaling_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_control_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_ingestion_url: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct MeetingFeaturesConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioFeatures>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AudioFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo_reduction: Option<MeetingFeatureStatus>,
}

impl_shape! {
    StartWebRtcContactRequest = "StartWebRTCContactRequest",
    StartWebRtcContactResponse = "StartWebRTCContactResponse",
    AllowedCapabilities,
    ConnectionData,
    Attendee,
    Meeting,
    MediaPlacement,
    MeetingFeaturesConfiguration,
    AudioFeatures,
}

map_entries! {
    StartWebRtcContactRequest {
        attributes: add_attributes_entry / clear_attributes_entries => String,
        references: add_references_entry / clear_references_entries => Reference,
    }
}
