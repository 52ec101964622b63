//! Routing criteria: the ordered steps that decide which agents may take a contact.

use chrono::{DateTime, Utc};
use connect_define::Double;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::enums::RoutingCriteriaStepStatus;
use crate::error::ModelError;

/// Routing steps applied to a contact, evaluated in order.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct RoutingCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
    /// When the criteria were applied to the contact.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub activation_timestamp: Option<DateTime<Utc>>,
    /// Number of times the criteria have been updated on this contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

/// A single routing step.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<Expiry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoutingCriteriaStepStatus>,
}

/// When a routing step stops applying.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Expiry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "connect_define::timestamp::epoch_seconds"
    )]
    pub expiry_timestamp: Option<DateTime<Utc>>,
}

/// A tree of attribute conditions.
///
/// Only one of the three members is expected to be set; nested `And`/`Or`
/// lists may contain further expressions.
///
/// ## Examples
///
/// ```
/// use connect_model::routing::{AttributeConditionBuilder, ExpressionBuilder};
///
/// let skill = |name: &str, level: f64| {
///     ExpressionBuilder::default()
///         .attribute_condition(
///             AttributeConditionBuilder::default()
///                 .name(name)
///                 .proficiency_level(level)
///                 .comparison_operator("NumberGreaterOrEqualTo")
///                 .build()
///                 .unwrap(),
///         )
///         .build()
///         .unwrap()
/// };
///
/// let expression = ExpressionBuilder::default()
///     .and_expression(vec![skill("Technology", 3.0), skill("Language", 4.0)])
///     .build()
///     .unwrap();
///
/// assert_eq!(expression.and_expression.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct Expression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_condition: Option<AttributeCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub and_expression: Option<Vec<Expression>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or_expression: Option<Vec<Expression>>,
}

/// A predefined attribute an agent must match.
#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AttributeCondition {
    /// Name of the predefined attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Value of the predefined attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Proficiency level, from 1.0 to 5.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency_level: Option<Double>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_criteria: Option<MatchCriteria>,
    /// Currently only `NumberGreaterOrEqualTo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<String>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct MatchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents_criteria: Option<AgentsCriteria>,
}

#[derive(Builder, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[builder(build_fn(error = "ModelError"))]
#[builder(default, setter(strip_option, into))]
#[serde(rename_all = "PascalCase")]
pub struct AgentsCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_ids: Option<Vec<String>>,
}

impl_shape! {
    RoutingCriteria,
    Step,
    Expiry,
    Expression,
    AttributeCondition,
    MatchCriteria,
    AgentsCriteria,
}

sequence_items! {
    RoutingCriteria {
        steps: add_steps_item => Step,
    }
}

sequence_items! {
    Expression {
        and_expression: add_and_expression_item => Expression,
        or_expression: add_or_expression_item => Expression,
    }
}

sequence_items! {
    AgentsCriteria {
        agent_ids: add_agent_ids_item => String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn condition(name: &str, level: f64) -> Expression {
        Expression {
            attribute_condition: Some(AttributeCondition {
                name: Some(name.to_string()),
                proficiency_level: Some(Double(level)),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn nested_expressions_parse() {
        let body = r#"{
            "Steps": [{
                "Status": "ACTIVE",
                "Expiry": { "DurationInSeconds": 30 },
                "Expression": {
                    "OrExpression": [
                        { "AttributeCondition": { "Name": "Language", "Value": "French", "ProficiencyLevel": 4.0 } },
                        { "AndExpression": [
                            { "AttributeCondition": { "Name": "Technology", "ProficiencyLevel": 2.5 } }
                        ] }
                    ]
                }
            }],
            "ActivationTimestamp": 1700000000,
            "Index": 0
        }"#;

        let criteria: RoutingCriteria = serde_json::from_str(body).unwrap();
        let step = &criteria.steps.as_ref().unwrap()[0];
        assert_eq!(step.status, Some(RoutingCriteriaStepStatus::Active));

        let or = step.expression.as_ref().unwrap().or_expression.as_ref().unwrap();
        assert_eq!(or.len(), 2);
        let inner = &or[1].and_expression.as_ref().unwrap()[0];
        assert_eq!(
            inner.attribute_condition.as_ref().unwrap().proficiency_level,
            Some(Double(2.5))
        );
    }

    #[test]
    fn recursive_equality_and_hashing() {
        let a = Expression {
            and_expression: Some(vec![condition("Technology", 3.0), condition("Language", 4.0)]),
            ..Default::default()
        };
        let b = a.clone();
        let c = Expression {
            and_expression: Some(vec![condition("Technology", 3.0), condition("Language", 4.5)]),
            ..Default::default()
        };

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_lists_nested_conditions() {
        let text = condition("Technology", 3.0).to_string();
        assert!(text.contains("AttributeCondition: {"));
        assert!(text.contains("Name: Technology"));
        assert!(text.contains("ProficiencyLevel: 3.0"));
    }
}
