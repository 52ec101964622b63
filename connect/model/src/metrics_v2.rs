//! Metric queries of the second generation API.
//!
//! Unlike the historical API these queries address any resource by ARN,
//! accept open-ended filter keys and support up to 35 days of history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use connect_define::Double;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::enums::{Comparison, MetricNameV2};
use crate::error::ModelError;

/// Queries metrics for an instance or a resource within it.
///
/// ## Examples
///
/// ```
/// use chrono::DateTime;
/// use connect_model::enums::MetricNameV2;
/// use connect_model::metrics_v2::{FilterV2, GetMetricDataV2RequestBuilder, MetricV2};
///
/// let request = GetMetricDataV2RequestBuilder::default()
///     .resource_arn("arn:aws:connect:us-west-2:123456789012:instance/i-1")
///     .start_time(DateTime::from_timestamp(1_700_000_000, 0).unwrap())
///     .end_time(DateTime::from_timestamp(1_700_086_400, 0).unwrap())
///     .filters(vec![FilterV2::new("QUEUE", ["q-1", "q-2"])])
///     .groupings(vec!["QUEUE".to_string()])
///     .metrics(vec![MetricV2::named(MetricNameV2::AvgHandleTime)])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.filters.unwrap()[0].filter_values.as_ref().unwrap().len(), 2);
/// ```
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataV2Request {
    /// ARN of the instance the metrics belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// Inclusive start of the reporting interval, at most 35 days back.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub start_time: Option<DateTime<Utc>>,
    /// Exclusive end, at most 24 hours after the start.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub end_time: Option<DateTime<Utc>>,
    /// Between 1 and 5 filters; a queue, routing profile, agent or user
    /// hierarchy filter is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<FilterV2>>,
    /// Grouping keys such as `QUEUE`, `CHANNEL` or `AGENT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MetricV2>>,
    /// Pagination token (1-2500 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Results per page (1-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// A filter key and the values it matches.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct FilterV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_values: Option<Vec<String>>,
}

impl FilterV2 {
    /// Creates a filter matching any of `values` under `key`.
    pub fn new<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter_key: Some(key.into()),
            filter_values: Some(values.into_iter().map(Into::into).collect()),
        }
    }
}

/// A metric to compute, with optional thresholds and filters.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct MetricV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<MetricNameV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Vec<ThresholdV2>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filters: Option<Vec<MetricFilterV2>>,
}

impl MetricV2 {
    /// Creates a metric request with no threshold or filter.
    pub fn named(name: impl Into<MetricNameV2>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct ThresholdV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_value: Option<Double>,
}

/// Restricts the contacts a metric counts.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct MetricFilterV2 {
    /// For example `INITIATION_METHOD` or `DISCONNECT_REASON`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filter_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filter_values: Option<Vec<String>>,
    /// Count contacts that do not match instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataV2Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_results: Option<Vec<MetricResultV2>>,
}

/// Metric values for one combination of grouping keys.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct MetricResultV2 {
    /// Grouping key to value, e.g. `QUEUE` to a queue ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<MetricDataV2>>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct MetricDataV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Double>,
}

impl_shape! {
    GetMetricDataV2Request,
    FilterV2,
    MetricV2,
    ThresholdV2,
    MetricFilterV2,
    GetMetricDataV2Response,
    MetricResultV2,
    MetricDataV2,
}

map_entries! {
    MetricResultV2 {
        dimensions: add_dimensions_entry / clear_dimensions_entries => String,
    }
}

sequence_items! {
    GetMetricDataV2Request {
        filters: add_filters_item => FilterV2,
        groupings: add_groupings_item => String,
        metrics: add_metrics_item => MetricV2,
    }
}

sequence_items! {
    FilterV2 {
        filter_values: add_filter_values_item => String,
    }
}

sequence_items! {
    MetricV2 {
        threshold: add_threshold_item => ThresholdV2,
        metric_filters: add_metric_filters_item => MetricFilterV2,
    }
}

sequence_items! {
    MetricFilterV2 {
        metric_filter_values: add_metric_filter_values_item => String,
    }
}

sequence_items! {
    GetMetricDataV2Response {
        metric_results: add_metric_results_item => MetricResultV2,
    }
}

sequence_items! {
    MetricResultV2 {
        collections: add_collections_item => MetricDataV2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_with_threshold_and_filter() {
        let metric = MetricV2Builder::default()
            .name(MetricNameV2::SumContactsAnsweredInX)
            .threshold(vec![ThresholdV2 {
                comparison: Some(Comparison::Lt),
                threshold_value: Some(Double(20.0)),
            }])
            .metric_filters(vec![MetricFilterV2 {
                metric_filter_key: Some("INITIATION_METHOD".to_string()),
                metric_filter_values: Some(vec!["INBOUND".to_string()]),
                negate: Some(false),
            }])
            .build()
            .unwrap();

        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(json["Name"], "SUM_CONTACTS_ANSWERED_IN_X");
        assert_eq!(json["Threshold"][0]["ThresholdValue"], 20.0);
        assert_eq!(json["MetricFilters"][0]["Negate"], false);
    }

    #[test]
    fn unlisted_metric_names_pass_through() {
        let body = r#"{"Name":"AVG_RESOLUTION_TIME"}"#;
        let metric: MetricV2 = serde_json::from_str(body).unwrap();
        assert_eq!(
            metric.name,
            Some(MetricNameV2::Unknown("AVG_RESOLUTION_TIME".to_string()))
        );
        assert_eq!(serde_json::to_string(&metric).unwrap(), body);
    }

    #[test]
    fn response_dimensions_are_a_map() {
        let body = r#"{
            "MetricResults": [{
                "Dimensions": { "QUEUE": "arn:queue:1", "CHANNEL": "VOICE" },
                "Collections": [{ "Metric": { "Name": "CONTACTS_HANDLED" }, "Value": 12.0 }]
            }]
        }"#;

        let response: GetMetricDataV2Response = serde_json::from_str(body).unwrap();
        let result = &response.metric_results.as_ref().unwrap()[0];
        let dimensions = result.dimensions.as_ref().unwrap();
        assert_eq!(dimensions["QUEUE"], "arn:queue:1");
        assert_eq!(dimensions.len(), 2);
    }

    #[test]
    fn dimension_entries_reject_duplicates() {
        let mut result = MetricResultV2::default();
        result.add_dimensions_entry("QUEUE", "arn:queue:1").unwrap();
        assert!(result.add_dimensions_entry("QUEUE", "arn:queue:2").is_err());
        assert_eq!(result.dimensions.as_ref().unwrap()["QUEUE"], "arn:queue:1");
    }

    #[test]
    fn filter_constructor_collects_values() {
        let filter = FilterV2::new("CHANNEL", vec!["VOICE".to_string(), "CHAT".to_string()]);
        assert_eq!(filter.filter_key.as_deref(), Some("CHANNEL"));
        assert_eq!(filter.filter_values.unwrap(), vec!["VOICE", "CHAT"]);
    }
}
