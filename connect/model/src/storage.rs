//! Where an instance stores recordings, transcripts, reports and streams.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::enums::{EncryptionType, InstanceStorageResourceType, StorageType};
use crate::error::ModelError;

/// A storage destination for one resource type of an instance.
///
/// Exactly one of the per-backend configs is expected, matching
/// `storage_type`.
///
/// ## Examples
///
/// ```
/// use connect_model::enums::StorageType;
/// use connect_model::storage::{InstanceStorageConfigBuilder, S3Config};
///
/// let config = InstanceStorageConfigBuilder::default()
///     .storage_type(StorageType::S3)
///     .s3_config(S3Config::new("recordings-bucket", "connect/"))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.to_string(), "{S3Config: {BucketName: recordings-bucket, BucketPrefix: connect/}, StorageType: S3}");
/// ```
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct InstanceStorageConfig {
    /// Identifier assigned by the service when the config is associated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_config: Option<S3Config>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinesis_video_stream_config: Option<KinesisVideoStreamConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinesis_stream_config: Option<KinesisStreamConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinesis_firehose_config: Option<KinesisFirehoseConfig>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct S3Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_config: Option<EncryptionConfig>,
}

impl S3Config {
    /// Creates an unencrypted bucket destination.
    pub fn new(bucket_name: impl Into<String>, bucket_prefix: impl Into<String>) -> Self {
        Self {
            bucket_name: Some(bucket_name.into()),
            bucket_prefix: Some(bucket_prefix.into()),
            encryption_config: None,
        }
    }
}

/// Encryption applied to stored data.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct EncryptionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_type: Option<EncryptionType>,
    /// Full ARN of the KMS key; an alias is not accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

/// Kinesis Video Streams destination for live media.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct KinesisVideoStreamConfig {
    /// Prefix of the video stream name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// 0 means the data is not retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_period_hours: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_config: Option<EncryptionConfig>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct KinesisStreamConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct KinesisFirehoseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firehose_arn: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AssociateInstanceStorageConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<InstanceStorageResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_config: Option<InstanceStorageConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AssociateInstanceStorageConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceStorageConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<InstanceStorageResourceType>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceStorageConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_config: Option<InstanceStorageConfig>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct ListInstanceStorageConfigsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<InstanceStorageResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Results per page (1-10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct ListInstanceStorageConfigsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_configs: Option<Vec<InstanceStorageConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl_shape! {
    InstanceStorageConfig,
    S3Config,
    EncryptionConfig,
    KinesisVideoStreamConfig,
    KinesisStreamConfig,
    KinesisFirehoseConfig,
    AssociateInstanceStorageConfigRequest,
    AssociateInstanceStorageConfigResponse,
    DescribeInstanceStorageConfigRequest,
    DescribeInstanceStorageConfigResponse,
    ListInstanceStorageConfigsRequest,
    ListInstanceStorageConfigsResponse,
}

sequence_items! {
    ListInstanceStorageConfigsResponse {
        storage_configs: add_storage_configs_item => InstanceStorageConfig,
    }
}
