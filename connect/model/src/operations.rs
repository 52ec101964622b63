//! The Amazon Connect operation catalog.

use connect_define::{Operation, RestMethod, ServiceApi, Shape};

use crate::contact::{
    DescribeContactRequest, DescribeContactResponse, GetContactAttributesRequest,
    GetContactAttributesResponse, StopContactRequest, StopContactResponse,
    UpdateContactAttributesRequest, UpdateContactAttributesResponse,
};
use crate::metrics::{
    GetCurrentMetricDataRequest, GetCurrentMetricDataResponse, GetMetricDataRequest,
    GetMetricDataResponse,
};
use crate::metrics_v2::{GetMetricDataV2Request, GetMetricDataV2Response};
use crate::persistent_contact::{
    CreatePersistentContactAssociationRequest, CreatePersistentContactAssociationResponse,
};
use crate::start_contact::{
    StartChatContactRequest, StartChatContactResponse, StartOutboundVoiceContactRequest,
    StartOutboundVoiceContactResponse, StartTaskContactRequest, StartTaskContactResponse,
};
use crate::storage::{
    AssociateInstanceStorageConfigRequest, AssociateInstanceStorageConfigResponse,
    DescribeInstanceStorageConfigRequest, DescribeInstanceStorageConfigResponse,
    ListInstanceStorageConfigsRequest, ListInstanceStorageConfigsResponse,
};
use crate::tagging::{
    ListTagsForResourceRequest, ListTagsForResourceResponse, TagResourceRequest,
    TagResourceResponse, UntagResourceRequest, UntagResourceResponse,
};
use crate::traffic_distribution::{
    CreateTrafficDistributionGroupRequest, CreateTrafficDistributionGroupResponse,
    DeleteTrafficDistributionGroupRequest, DeleteTrafficDistributionGroupResponse,
    DescribeTrafficDistributionGroupRequest, DescribeTrafficDistributionGroupResponse,
};
use crate::webrtc::{StartWebRtcContactRequest, StartWebRtcContactResponse};

fn op<I: Shape, O: Shape>(name: &str, method: RestMethod, path: &str, description: &str) -> Operation {
    Operation {
        name: name.to_string(),
        method,
        path: path.to_string(),
        description: description.to_string(),
        input: I::shape_ref(),
        output: O::shape_ref(),
    }
}

/// Creates the Amazon Connect service definition.
///
/// ## Operations
///
/// - `DescribeContact` - GET /contacts/{InstanceId}/{ContactId}
/// - `StartOutboundVoiceContact` - PUT /contact/outbound-voice
/// - `StartChatContact` - PUT /contact/chat
/// - `StartTaskContact` - PUT /contact/task
/// - `StartWebRTCContact` - PUT /contact/webrtc
/// - `StopContact` - POST /contact/stop
/// - `GetContactAttributes` - GET /contact/attributes/{InstanceId}/{InitialContactId}
/// - `UpdateContactAttributes` - POST /contact/attributes
/// - `CreatePersistentContactAssociation` - POST /contact/persistent-contact-association/{InstanceId}/{InitialContactId}
/// - `GetMetricData` - POST /metrics/historical/{InstanceId}
/// - `GetCurrentMetricData` - POST /metrics/current/{InstanceId}
/// - `GetMetricDataV2` - POST /metrics/data
/// - `CreateTrafficDistributionGroup` - PUT /traffic-distribution-group
/// - `DescribeTrafficDistributionGroup` - GET /traffic-distribution-group/{TrafficDistributionGroupId}
/// - `DeleteTrafficDistributionGroup` - DELETE /traffic-distribution-group/{TrafficDistributionGroupId}
/// - `AssociateInstanceStorageConfig` - PUT /instance/{InstanceId}/storage-config
/// - `DescribeInstanceStorageConfig` - GET /instance/{InstanceId}/storage-config/{AssociationId}
/// - `ListInstanceStorageConfigs` - GET /instance/{InstanceId}/storage-configs
/// - `TagResource` - POST /tags/{resourceArn}
/// - `UntagResource` - DELETE /tags/{resourceArn}
/// - `ListTagsForResource` - GET /tags/{resourceArn}
///
/// ## Examples
///
/// ```rust
/// use connect_define::RestMethod;
/// use connect_model::define_connect_api;
///
/// let api = define_connect_api();
/// assert_eq!(api.name, "Amazon Connect");
///
/// let describe = api.operation("DescribeContact").unwrap();
/// assert_eq!(describe.method, RestMethod::Get);
/// assert_eq!(describe.path_params(), vec!["InstanceId", "ContactId"]);
/// assert_eq!(describe.output.shape_name, "DescribeContactResponse");
/// ```
pub fn define_connect_api() -> ServiceApi {
    use RestMethod::{Delete, Get, Post, Put};

    ServiceApi {
        name: "Amazon Connect".to_string(),
        endpoint_prefix: "connect".to_string(),
        api_version: "2017-08-08".to_string(),
        protocol: "rest-json".to_string(),
        docs_url: Some("https://docs.aws.amazon.com/connect/latest/APIReference/".to_string()),
        operations: vec![
            op::<DescribeContactRequest, DescribeContactResponse>(
                "DescribeContact",
                Get,
                "/contacts/{InstanceId}/{ContactId}",
                "Describes the specified contact",
            ),
            op::<StartOutboundVoiceContactRequest, StartOutboundVoiceContactResponse>(
                "StartOutboundVoiceContact",
                Put,
                "/contact/outbound-voice",
                "Places an outbound call to a contact and connects it to a flow",
            ),
            op::<StartChatContactRequest, StartChatContactResponse>(
                "StartChatContact",
                Put,
                "/contact/chat",
                "Starts a flow to accept a chat from a customer",
            ),
            op::<StartTaskContactRequest, StartTaskContactResponse>(
                "StartTaskContact",
                Put,
                "/contact/task",
                "Initiates a flow to start a new task contact",
            ),
            op::<StartWebRtcContactRequest, StartWebRtcContactResponse>(
                "StartWebRTCContact",
                Put,
                "/contact/webrtc",
                "Places an in-app, web or video call to a contact",
            ),
            op::<StopContactRequest, StopContactResponse>(
                "StopContact",
                Post,
                "/contact/stop",
                "Ends the specified contact",
            ),
            op::<GetContactAttributesRequest, GetContactAttributesResponse>(
                "GetContactAttributes",
                Get,
                "/contact/attributes/{InstanceId}/{InitialContactId}",
                "Retrieves the user-defined attributes of a contact",
            ),
            op::<UpdateContactAttributesRequest, UpdateContactAttributesResponse>(
                "UpdateContactAttributes",
                Post,
                "/contact/attributes",
                "Creates or updates user-defined contact attributes",
            ),
            op::<CreatePersistentContactAssociationRequest, CreatePersistentContactAssociationResponse>(
                "CreatePersistentContactAssociation",
                Post,
                "/contact/persistent-contact-association/{InstanceId}/{InitialContactId}",
                "Enables persistent chat on a contact from a past chat",
            ),
            op::<GetMetricDataRequest, GetMetricDataResponse>(
                "GetMetricData",
                Post,
                "/metrics/historical/{InstanceId}",
                "Gets historical metric data for queues",
            ),
            op::<GetCurrentMetricDataRequest, GetCurrentMetricDataResponse>(
                "GetCurrentMetricData",
                Post,
                "/metrics/current/{InstanceId}",
                "Gets real-time metric data for queues",
            ),
            op::<GetMetricDataV2Request, GetMetricDataV2Response>(
                "GetMetricDataV2",
                Post,
                "/metrics/data",
                "Gets metric data for an instance or its resources",
            ),
            op::<CreateTrafficDistributionGroupRequest, CreateTrafficDistributionGroupResponse>(
                "CreateTrafficDistributionGroup",
                Put,
                "/traffic-distribution-group",
                "Creates a traffic distribution group",
            ),
            op::<DescribeTrafficDistributionGroupRequest, DescribeTrafficDistributionGroupResponse>(
                "DescribeTrafficDistributionGroup",
                Get,
                "/traffic-distribution-group/{TrafficDistributionGroupId}",
                "Gets details of a traffic distribution group",
            ),
            op::<DeleteTrafficDistributionGroupRequest, DeleteTrafficDistributionGroupResponse>(
                "DeleteTrafficDistributionGroup",
                Delete,
                "/traffic-distribution-group/{TrafficDistributionGroupId}",
                "Deletes a traffic distribution group",
            ),
            op::<AssociateInstanceStorageConfigRequest, AssociateInstanceStorageConfigResponse>(
                "AssociateInstanceStorageConfig",
                Put,
                "/instance/{InstanceId}/storage-config",
                "Associates a storage resource type with an instance",
            ),
            op::<DescribeInstanceStorageConfigRequest, DescribeInstanceStorageConfigResponse>(
                "DescribeInstanceStorageConfig",
                Get,
                "/instance/{InstanceId}/storage-config/{AssociationId}",
                "Retrieves the storage configuration of an association",
            ),
            op::<ListInstanceStorageConfigsRequest, ListInstanceStorageConfigsResponse>(
                "ListInstanceStorageConfigs",
                Get,
                "/instance/{InstanceId}/storage-configs",
                "Lists the storage configurations for a resource type",
            ),
            op::<TagResourceRequest, TagResourceResponse>(
                "TagResource",
                Post,
                "/tags/{resourceArn}",
                "Adds tags to a resource",
            ),
            op::<UntagResourceRequest, UntagResourceResponse>(
                "UntagResource",
                Delete,
                "/tags/{resourceArn}",
                "Removes tags from a resource",
            ),
            op::<ListTagsForResourceRequest, ListTagsForResourceResponse>(
                "ListTagsForResource",
                Get,
                "/tags/{resourceArn}",
                "Lists the tags of a resource",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_define::ServiceConfig;
    use std::collections::HashSet;

    #[test]
    fn service_metadata() {
        let api = define_connect_api();
        assert_eq!(api.endpoint_prefix, "connect");
        assert_eq!(api.api_version, "2017-08-08");
        assert_eq!(api.protocol, "rest-json");
        assert_eq!(
            api.endpoint(&ServiceConfig::new("eu-west-2")),
            "https://connect.eu-west-2.amazonaws.com"
        );
    }

    #[test]
    fn operation_names_are_unique() {
        let api = define_connect_api();
        let names: HashSet<_> = api.operations.iter().map(|op| op.name.as_str()).collect();
        assert_eq!(names.len(), api.operations.len());
        assert_eq!(api.operations.len(), 21);
    }

    #[test]
    fn shapes_follow_operation_names() {
        for op in define_connect_api().operations {
            assert_eq!(op.input.shape_name, format!("{}Request", op.name));
            assert_eq!(op.output.shape_name, format!("{}Response", op.name));
            assert!(op.input.type_path.is_some());
        }
    }

    #[test]
    fn webrtc_operation_points_at_rust_type() {
        let api = define_connect_api();
        let op = api.operation("StartWebRTCContact").unwrap();
        assert_eq!(op.input.shape_name, "StartWebRTCContactRequest");
        assert!(op.input.full_path().ends_with("webrtc::StartWebRtcContactRequest"));
    }

    #[test]
    fn path_parameters() {
        let api = define_connect_api();
        let params = |name: &str| {
            api.operation(name)
                .map(|op| op.path_params().into_iter().map(String::from).collect::<Vec<_>>())
                .unwrap_or_default()
        };
        assert_eq!(params("GetMetricData"), vec!["InstanceId"]);
        assert_eq!(params("DescribeInstanceStorageConfig"), vec!["InstanceId", "AssociationId"]);
        assert_eq!(params("TagResource"), vec!["resourceArn"]);
        assert!(params("StartChatContact").is_empty());
    }

    fn binds_members<I: Shape>(params: &[&str]) -> bool {
        let object = params
            .iter()
            .map(|param| (param.to_string(), serde_json::Value::from("x")))
            .collect();
        let Ok(input) = serde_json::from_value::<I>(serde_json::Value::Object(object)) else {
            return false;
        };
        let Ok(echoed) = serde_json::to_value(&input) else {
            return false;
        };
        params.iter().all(|param| echoed[*param] == "x")
    }

    #[test]
    fn uri_placeholders_name_input_members() {
        let checks: Vec<(&str, fn(&[&str]) -> bool)> = vec![
            ("DescribeContact", binds_members::<DescribeContactRequest>),
            ("GetContactAttributes", binds_members::<GetContactAttributesRequest>),
            (
                "CreatePersistentContactAssociation",
                binds_members::<CreatePersistentContactAssociationRequest>,
            ),
            ("GetMetricData", binds_members::<GetMetricDataRequest>),
            ("GetCurrentMetricData", binds_members::<GetCurrentMetricDataRequest>),
            (
                "DescribeTrafficDistributionGroup",
                binds_members::<DescribeTrafficDistributionGroupRequest>,
            ),
            (
                "DeleteTrafficDistributionGroup",
                binds_members::<DeleteTrafficDistributionGroupRequest>,
            ),
            (
                "AssociateInstanceStorageConfig",
                binds_members::<AssociateInstanceStorageConfigRequest>,
            ),
            (
                "DescribeInstanceStorageConfig",
                binds_members::<DescribeInstanceStorageConfigRequest>,
            ),
            ("ListInstanceStorageConfigs", binds_members::<ListInstanceStorageConfigsRequest>),
            ("TagResource", binds_members::<TagResourceRequest>),
            ("UntagResource", binds_members::<UntagResourceRequest>),
            ("ListTagsForResource", binds_members::<ListTagsForResourceRequest>),
        ];

        let api = define_connect_api();
        for (name, binds) in &checks {
            let op = api.operation(name).unwrap();
            assert!(binds(&op.path_params()), "{name} placeholders do not bind");
        }

        let with_params = api
            .operations
            .iter()
            .filter(|op| !op.path_params().is_empty())
            .count();
        assert_eq!(with_params, checks.len());
    }
}
