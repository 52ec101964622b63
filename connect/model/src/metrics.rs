//! Historical and real-time queue metrics.

use chrono::{DateTime, Utc};
use connect_define::Double;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::enums::{
    Channel, Comparison, CurrentMetricName, Grouping, HistoricalMetricName, SortOrder, Statistic,
    Unit,
};
use crate::error::ModelError;

/// Queries historical metrics for queues in 5-minute intervals.
///
/// `start_time` and `end_time` must be multiples of 5 minutes and no more
/// than 24 hours apart; the service enforces this, not the model.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub end_time: Option<DateTime<Utc>>,
    /// Queues, channels and routing profiles to report on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
    /// Without groupings the result is aggregated across all queues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupings: Option<Vec<Grouping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_metrics: Option<Vec<HistoricalMetric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Results per page (1-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Narrows a metric query.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Filters {
    /// Queue identifiers or ARNs, up to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queues: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_profiles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_step_expressions: Option<Vec<String>>,
}

/// A historical metric and how to aggregate it.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HistoricalMetricName>,
    /// Only used by `SERVICE_LEVEL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Threshold>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<Statistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Threshold {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_value: Option<Double>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_results: Option<Vec<HistoricalMetricResult>>,
}

/// Metric values for one combination of grouping dimensions.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalMetricResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<HistoricalMetricData>>,
}

/// The grouping values a metric result applies to.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<QueueReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_profile: Option<RoutingProfileReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_step_expression: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct QueueReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct RoutingProfileReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalMetricData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<HistoricalMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Double>,
}

/// Queries real-time metrics for queues.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct GetCurrentMetricDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupings: Option<Vec<Grouping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_metrics: Option<Vec<CurrentMetric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// At most one sort criterion is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<Vec<CurrentMetricSortCriteria>>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct CurrentMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<CurrentMetricName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct CurrentMetricSortCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by_metric: Option<CurrentMetricName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct GetCurrentMetricDataResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_results: Option<Vec<CurrentMetricResult>>,
    /// When the snapshot behind the values was taken.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub data_snapshot_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_total_count: Option<i64>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct CurrentMetricResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<CurrentMetricData>>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct CurrentMetricData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<CurrentMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Double>,
}

impl_shape! {
    GetMetricDataRequest,
    Filters,
    HistoricalMetric,
    Threshold,
    GetMetricDataResponse,
    HistoricalMetricResult,
    Dimensions,
    QueueReference,
    RoutingProfileReference,
    HistoricalMetricData,
    GetCurrentMetricDataRequest,
    CurrentMetric,
    CurrentMetricSortCriteria,
    GetCurrentMetricDataResponse,
    CurrentMetricResult,
    CurrentMetricData,
}

sequence_items! {
    GetMetricDataRequest {
        groupings: add_groupings_item => Grouping,
        historical_metrics: add_historical_metrics_item => HistoricalMetric,
    }
}

sequence_items! {
    Filters {
        queues: add_queues_item => String,
        channels: add_channels_item => Channel,
        routing_profiles: add_routing_profiles_item => String,
        routing_step_expressions: add_routing_step_expressions_item => String,
    }
}

sequence_items! {
    GetMetricDataResponse {
        metric_results: add_metric_results_item => HistoricalMetricResult,
    }
}

sequence_items! {
    HistoricalMetricResult {
        collections: add_collections_item => HistoricalMetricData,
    }
}

sequence_items! {
    GetCurrentMetricDataRequest {
        groupings: add_groupings_item => Grouping,
        current_metrics: add_current_metrics_item => CurrentMetric,
        sort_criteria: add_sort_criteria_item => CurrentMetricSortCriteria,
    }
}

sequence_items! {
    GetCurrentMetricDataResponse {
        metric_results: add_metric_results_item => CurrentMetricResult,
    }
}

sequence_items! {
    CurrentMetricResult {
        collections: add_collections_item => CurrentMetricData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn historical_request_wire_form() {
        let request = GetMetricDataRequestBuilder::default()
            .instance_id("i-1")
            .start_time(DateTime::from_timestamp(1_700_000_100, 0).unwrap())
            .end_time(DateTime::from_timestamp(1_700_003_700, 0).unwrap())
            .filters(Filters {
                queues: Some(vec!["q-1".to_string()]),
                channels: Some(vec![Channel::Voice, Channel::Chat]),
                ..Default::default()
            })
            .groupings(vec![Grouping::Queue])
            .historical_metrics(vec![HistoricalMetric {
                name: Some(HistoricalMetricName::ServiceLevel),
                threshold: Some(Threshold {
                    comparison: Some(Comparison::Lt),
                    threshold_value: Some(Double(60.0)),
                }),
                statistic: Some(Statistic::Avg),
                unit: Some(Unit::Percent),
            }])
            .max_results(100)
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["StartTime"], 1_700_000_100);
        assert_eq!(json["Filters"]["Channels"][1], "CHAT");
        assert_eq!(json["Groupings"][0], "QUEUE");
        assert_eq!(json["HistoricalMetrics"][0]["Threshold"]["Comparison"], "LT");
        assert_eq!(json["HistoricalMetrics"][0]["Threshold"]["ThresholdValue"], 60.0);
        assert_eq!(json["MaxResults"], 100);
    }

    #[test]
    fn historical_response_parses() {
        let body = r#"{
            "MetricResults": [{
                "Dimensions": { "Queue": { "Id": "q-1", "Arn": "arn:queue:1" }, "Channel": "VOICE" },
                "Collections": [{
                    "Metric": { "Name": "CONTACTS_HANDLED", "Statistic": "SUM", "Unit": "COUNT" },
                    "Value": 42.0
                }]
            }]
        }"#;

        let response: GetMetricDataResponse = serde_json::from_str(body).unwrap();
        let result = &response.metric_results.as_ref().unwrap()[0];
        let dimensions = result.dimensions.as_ref().unwrap();
        assert_eq!(dimensions.channel, Some(Channel::Voice));
        assert_eq!(dimensions.queue.as_ref().unwrap().id.as_deref(), Some("q-1"));

        let data = &result.collections.as_ref().unwrap()[0];
        assert_eq!(
            data.metric.as_ref().unwrap().name,
            Some(HistoricalMetricName::ContactsHandled)
        );
        assert_eq!(data.value, Some(Double(42.0)));
    }

    #[test]
    fn current_response_with_snapshot_time() {
        let body = r#"{
            "MetricResults": [{
                "Collections": [{ "Metric": { "Name": "AGENTS_ONLINE", "Unit": "COUNT" }, "Value": 7 }]
            }],
            "DataSnapshotTime": 1700000123.25,
            "ApproximateTotalCount": 1
        }"#;

        let response: GetCurrentMetricDataResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.approximate_total_count, Some(1));
        assert_eq!(
            response.data_snapshot_time.unwrap().timestamp_subsec_millis(),
            250
        );
        let results = response.metric_results.unwrap();
        let collections = results[0].collections.as_ref().unwrap();
        assert_eq!(collections[0].value, Some(Double(7.0)));
    }

    #[test]
    fn sort_criteria_overloads_agree() {
        let by_enum = CurrentMetricSortCriteria {
            sort_by_metric: Some(CurrentMetricName::OldestContactAge),
            sort_order: Some(SortOrder::Descending),
        };
        let by_string = CurrentMetricSortCriteriaBuilder::default()
            .sort_by_metric("OLDEST_CONTACT_AGE")
            .sort_order("DESCENDING")
            .build()
            .unwrap();
        assert_eq!(by_enum, by_string);
    }
}
