//! Query aggregations.
//!
//! Aggregations are discriminated by their `type` field. Types this crate
//! does not model decode into [`QueryAggregation::Other`] so that newer
//! service releases do not break query decoding.

use serde::de::{self, DeserializeOwned};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryAggregation {
    Term(QueryTermAggregation),
    Histogram(QueryHistogramAggregation),
    Timeslice(QueryTimesliceAggregation),
    Nested(QueryNestedAggregation),
    Filter(QueryFilterAggregation),
    Min(QueryCalculationAggregation),
    Max(QueryCalculationAggregation),
    Sum(QueryCalculationAggregation),
    Average(QueryCalculationAggregation),
    UniqueCount(QueryCalculationAggregation),
    TopHits(QueryTopHitsAggregation),
    GroupBy(QueryGroupByAggregation),
    /// Any aggregation type not listed above, kept as received.
    Other(GenericQueryAggregation),
}

impl QueryAggregation {
    /// The wire `type` of this aggregation.
    pub fn aggregation_type(&self) -> &str {
        match self {
            Self::Term(_) => "term",
            Self::Histogram(_) => "histogram",
            Self::Timeslice(_) => "timeslice",
            Self::Nested(_) => "nested",
            Self::Filter(_) => "filter",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Sum(_) => "sum",
            Self::Average(_) => "average",
            Self::UniqueCount(_) => "unique_count",
            Self::TopHits(_) => "top_hits",
            Self::GroupBy(_) => "group_by",
            Self::Other(g) => &g.aggregation_type,
        }
    }
}

fn from_value<T: DeserializeOwned, E: de::Error>(value: Value) -> Result<T, E> {
    serde_json::from_value(value).map_err(E::custom)
}

impl<'de> Deserialize<'de> for QueryAggregation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| de::Error::missing_field("type"))?
            .to_string();
        Ok(match kind.as_str() {
            "term" => Self::Term(from_value(value)?),
            "histogram" => Self::Histogram(from_value(value)?),
            "timeslice" => Self::Timeslice(from_value(value)?),
            "nested" => Self::Nested(from_value(value)?),
            "filter" => Self::Filter(from_value(value)?),
            "min" => Self::Min(from_value(value)?),
            "max" => Self::Max(from_value(value)?),
            "sum" => Self::Sum(from_value(value)?),
            "average" => Self::Average(from_value(value)?),
            "unique_count" => Self::UniqueCount(from_value(value)?),
            "top_hits" => Self::TopHits(from_value(value)?),
            "group_by" => Self::GroupBy(from_value(value)?),
            _ => Self::Other(from_value(value)?),
        })
    }
}

impl Serialize for QueryAggregation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            Self::Term(a) => serde_json::to_value(a),
            Self::Histogram(a) => serde_json::to_value(a),
            Self::Timeslice(a) => serde_json::to_value(a),
            Self::Nested(a) => serde_json::to_value(a),
            Self::Filter(a) => serde_json::to_value(a),
            Self::Min(a) | Self::Max(a) | Self::Sum(a) | Self::Average(a) | Self::UniqueCount(a) => {
                serde_json::to_value(a)
            }
            Self::TopHits(a) => serde_json::to_value(a),
            Self::GroupBy(a) => serde_json::to_value(a),
            Self::Other(a) => return a.serialize(serializer),
        };
        let mut body = body.map_err(ser::Error::custom)?;
        if let Value::Object(map) = &mut body {
            map.insert(
                "type".to_string(),
                Value::String(self.aggregation_type().to_string()),
            );
        }
        body.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericQueryAggregation {
    #[serde(rename = "type")]
    pub aggregation_type: String,
    #[serde(flatten)]
    pub additional_properties: HashMap<String, Value>,
}

/// Most frequent values of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTermAggregation {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<QueryTermAggregationResult>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTermAggregationResult {
    pub key: String,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevancy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_matching_documents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_matching_results: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryHistogramAggregation {
    pub field: String,
    pub interval: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<QueryHistogramAggregationResult>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryHistogramAggregationResult {
    /// Lower bound of the bucket.
    pub key: i64,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTimesliceAggregation {
    pub field: String,
    /// Bucket width, for example `1d` or `3h`.
    pub interval: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<QueryTimesliceAggregationResult>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTimesliceAggregationResult {
    pub key_as_string: String,
    /// Bucket start in milliseconds since the epoch.
    pub key: i64,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryNestedAggregation {
    pub path: String,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFilterAggregation {
    #[serde(rename = "match")]
    pub match_expression: String,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// `min`, `max`, `sum`, `average` and `unique_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryCalculationAggregation {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTopHitsAggregation {
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<QueryTopHitsAggregationResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTopHitsAggregationResult {
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<Vec<HashMap<String, Value>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryGroupByAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<QueryGroupByAggregationResult>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryGroupByAggregationResult {
    pub key: String,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevancy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_matching_documents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_matching_results: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}
