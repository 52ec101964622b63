//! Structural behavior shared by every shape: field access, builders,
//! equality, hashing, enum overloads and the diagnostic display.

use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::DateTime;
use connect_model::prelude::*;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_contact() -> Contact {
    Contact {
        id: Some("c-1".to_string()),
        channel: Some(Channel::Voice),
        total_pause_count: Some(2),
        initiation_timestamp: DateTime::from_timestamp(1_700_000_000, 0),
        queue_info: Some(QueueInfo {
            id: Some("q-1".to_string()),
            enqueue_timestamp: DateTime::from_timestamp(1_700_000_010, 0),
        }),
        routing_criteria: Some(RoutingCriteria {
            steps: Some(vec![Step {
                status: Some(RoutingCriteriaStepStatus::Active),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        tags: Some(BTreeMap::from([("team".to_string(), "billing".to_string())])),
        ..Default::default()
    }
}

#[test]
fn contact_display_scenario() {
    let contact = ContactBuilder::default()
        .id("c-1")
        .channel("VOICE")
        .total_pause_count(2)
        .build()
        .unwrap();

    let text = contact.to_string();
    assert!(text.contains("Id: c-1"), "{text}");
    assert!(text.contains("Channel: VOICE"), "{text}");
    assert!(text.contains("TotalPauseCount: 2"), "{text}");

    let twin = ContactBuilder::default()
        .id("c-1")
        .channel("VOICE")
        .total_pause_count(2)
        .build()
        .unwrap();
    assert_eq!(contact, twin);
    assert_eq!(hash_of(&contact), hash_of(&twin));
}

#[test]
fn field_round_trip() {
    let mut group = TrafficDistributionGroup::default();
    assert!(group.name.is_none());

    group.name = Some("primary".to_string());
    group.is_default = Some(false);
    group.status = Some(TrafficDistributionGroupStatus::Active);
    assert_eq!(group.name.as_deref(), Some("primary"));
    assert_eq!(group.is_default, Some(false));
    assert_eq!(group.status, Some(TrafficDistributionGroupStatus::Active));

    group.name = None;
    assert!(group.name.is_none());
}

#[test]
fn builder_matches_field_assignment() {
    let built = StartTaskContactRequestBuilder::default()
        .instance_id("i-1")
        .name("Follow up")
        .scheduled_time(DateTime::from_timestamp(1_700_086_400, 0).unwrap())
        .build()
        .unwrap();

    let mut assigned = StartTaskContactRequest::default();
    assigned.instance_id = Some("i-1".to_string());
    assigned.name = Some("Follow up".to_string());
    assigned.scheduled_time = DateTime::from_timestamp(1_700_086_400, 0);

    assert_eq!(built, assigned);
}

#[test]
fn unset_builder_members_stay_absent() {
    let request = StartChatContactRequestBuilder::default().build().unwrap();
    assert_eq!(request, StartChatContactRequest::default());
    assert_eq!(request.to_string(), "{}");
}

#[test]
fn equality_is_symmetric_and_hash_consistent() {
    let a = sample_contact();
    let b = sample_contact();
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn any_single_member_change_breaks_equality() {
    let a = sample_contact();

    let mut b = sample_contact();
    b.id = Some("c-2".to_string());
    assert_ne!(a, b);

    let mut b = sample_contact();
    b.total_pause_count = None;
    assert_ne!(a, b);

    let mut b = sample_contact();
    b.initiation_timestamp = DateTime::from_timestamp(1_700_000_001, 0);
    assert_ne!(a, b);

    let mut b = sample_contact();
    if let Some(queue) = b.queue_info.as_mut() {
        queue.id = Some("q-2".to_string());
    }
    assert_ne!(a, b);

    let mut b = sample_contact();
    if let Some(steps) = b.routing_criteria.as_mut().and_then(|rc| rc.steps.as_mut()) {
        steps[0].status = Some(RoutingCriteriaStepStatus::Expired);
    }
    assert_ne!(a, b);

    let mut b = sample_contact();
    b.add_tags_entry("cost-center", "7").unwrap();
    assert_ne!(a, b);
}

#[test]
fn floating_point_members_compare_exactly() {
    let audio = |score: f64| AudioQualityMetricsInfo {
        quality_score: Some(Double(score)),
        potential_quality_issues: None,
    };
    assert_eq!(audio(4.25), audio(4.25));
    assert_eq!(hash_of(&audio(4.25)), hash_of(&audio(4.25)));
    assert_ne!(audio(4.25), audio(4.250_000_1));
}

#[test]
fn non_finite_members_display_their_value() {
    let audio = AudioQualityMetricsInfo {
        quality_score: Some(Double(f64::NAN)),
        potential_quality_issues: None,
    };
    assert_eq!(audio.to_string(), "{QualityScore: NaN}");

    let json = serde_json::to_string(&audio).unwrap();
    let parsed: AudioQualityMetricsInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, audio);
}

#[test]
fn enum_and_string_overloads_are_equivalent() {
    let by_enum = ContactBuilder::default()
        .channel(Channel::Voice)
        .initiation_method(ContactInitiationMethod::Outbound)
        .answering_machine_detection_status(AnsweringMachineDetectionStatus::VoicemailBeep)
        .build()
        .unwrap();
    let by_string = ContactBuilder::default()
        .channel("VOICE")
        .initiation_method("OUTBOUND")
        .answering_machine_detection_status("VOICEMAIL_BEEP")
        .build()
        .unwrap();
    assert_eq!(by_enum, by_string);
    assert_eq!(hash_of(&by_enum), hash_of(&by_string));
}

#[test]
fn values_are_not_validated() {
    let contact = ContactBuilder::default()
        .total_pause_count(1_000)
        .id("")
        .channel("CARRIER_PIGEON")
        .build()
        .unwrap();
    assert_eq!(contact.total_pause_count, Some(1_000));
    assert_eq!(contact.channel.as_ref().map(Channel::as_str), Some("CARRIER_PIGEON"));
}

#[test]
fn wire_round_trip_preserves_equality() {
    let contact = sample_contact();
    let json = serde_json::to_string(&contact).unwrap();
    let parsed: Contact = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, contact);
}

#[test]
fn shape_names_match_service_definition() {
    assert_eq!(Contact::SHAPE_NAME, "Contact");
    assert_eq!(GetMetricDataV2Request::SHAPE_NAME, "GetMetricDataV2Request");
    assert_eq!(StartWebRtcContactRequest::SHAPE_NAME, "StartWebRTCContactRequest");
}
