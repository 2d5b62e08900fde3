//! Native queries.

use serde::de;
use serde::{Deserialize, Deserializer};

use crate::aggregation::Aggregation;
use crate::data_source::DataSource;
use crate::dimension::DimensionSpec;
use crate::error::SpecError;
use crate::filter::Filter;
use crate::tagged;

/// A native query: the fields every query type shares, plus the type-specific part.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub data_source: DataSource,
    /// ISO-8601 intervals, each formatted `start/end`.
    pub intervals: Vec<String>,
    pub filter: Option<Filter>,
    pub kind: QueryKind,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommonFields {
    data_source: DataSource,
    #[serde(default, deserialize_with = "tagged::one_or_many")]
    intervals: Vec<String>,
    #[serde(default)]
    filter: Option<Filter>,
}

impl<'de> Deserialize<'de> for Query {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let common = CommonFields::deserialize(&value).map_err(de::Error::custom)?;
        let kind = <QueryKind as Deserialize>::deserialize(value).map_err(de::Error::custom)?;
        Ok(Query {
            data_source: common.data_source,
            intervals: common.intervals,
            filter: common.filter,
            kind,
        })
    }
}

/// The part of a query that depends on its `queryType`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self", tag = "queryType")]
pub enum QueryKind {
    #[serde(rename = "scan")]
    Scan {
        #[serde(default)]
        columns: Vec<DimensionSpec>,
    },
    #[serde(rename = "timeseries")]
    Timeseries {
        #[serde(default, deserialize_with = "tagged::one_or_many")]
        aggregations: Vec<Aggregation>,
    },
    #[serde(rename = "topN")]
    TopN {
        dimension: DimensionSpec,
        metric: TopNMetric,
        threshold: u64,
        #[serde(default, deserialize_with = "tagged::one_or_many")]
        aggregations: Vec<Aggregation>,
    },
    #[serde(rename = "groupBy")]
    GroupBy {
        #[serde(default)]
        dimensions: Vec<DimensionSpec>,
        #[serde(default, deserialize_with = "tagged::one_or_many")]
        aggregations: Vec<Aggregation>,
    },
    /// A query type we don't know how to translate.
    #[serde(skip)]
    Unsupported(String),
}

impl<'de> Deserialize<'de> for QueryKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match tagged::unsupported_kind(&value, "queryType", &["scan", "timeseries", "topN", "groupBy"])
        {
            Some(kind) => Ok(QueryKind::Unsupported(kind)),
            None => QueryKind::deserialize(value).map_err(de::Error::custom),
        }
    }
}

/// How a topN query ranks its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopNMetric {
    /// By a named metric, highest first. Either a bare name or `{"type": "numeric"}`.
    Numeric(String),
    /// By the topN dimension itself.
    Dimension,
    /// The wrapped ordering, reversed.
    Inverted(Box<TopNMetric>),
}

#[derive(Deserialize)]
struct MetricSpecObject {
    #[serde(rename = "type")]
    kind: String,
    metric: Option<Box<TopNMetric>>,
}

impl TryFrom<MetricSpecObject> for TopNMetric {
    type Error = SpecError;

    fn try_from(spec: MetricSpecObject) -> Result<Self, Self::Error> {
        let missing_metric = || SpecError::MissingField {
            kind: spec.kind.clone(),
            field: "metric",
        };
        match spec.kind.as_str() {
            "numeric" => match spec.metric.as_deref() {
                Some(TopNMetric::Numeric(name)) => Ok(TopNMetric::Numeric(name.clone())),
                _ => Err(missing_metric()),
            },
            "inverted" => spec
                .metric
                .clone()
                .map(TopNMetric::Inverted)
                .ok_or_else(missing_metric),
            "dimension" | "lexicographic" | "alphaNumeric" => Ok(TopNMetric::Dimension),
            other => Err(SpecError::UnsupportedMetricSpec(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for TopNMetric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(name) => Ok(TopNMetric::Numeric(name)),
            value => MetricSpecObject::deserialize(value)
                .map_err(de::Error::custom)?
                .try_into()
                .map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::OutputName;

    fn parse(json: serde_json::Value) -> Query {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn it_parses_a_timeseries_query() {
        let query = parse(serde_json::json!({
            "queryType": "timeseries",
            "intervals": ["2020-06-24T00:00:00.000Z/2020-06-30T00:00:00.000Z"],
            "aggregations": [
                {"type": "cardinality", "name": "Dim7", "fields": ["Dim3"], "round": true}
            ],
            "dataSource": "SampleDataSource",
            "granularity": "all"
        }));

        assert_eq!(
            query,
            Query {
                data_source: DataSource::Table("SampleDataSource".to_string()),
                intervals: vec!["2020-06-24T00:00:00.000Z/2020-06-30T00:00:00.000Z".to_string()],
                filter: None,
                kind: QueryKind::Timeseries {
                    aggregations: vec![Aggregation::Cardinality {
                        name: OutputName::Literal("Dim7".to_string()),
                        fields: vec![DimensionSpec::Name("Dim3".to_string())],
                    }],
                },
            }
        );
    }

    #[test]
    fn it_accepts_a_single_aggregation_and_interval() {
        let query = parse(serde_json::json!({
            "queryType": "timeseries",
            "dataSource": "t",
            "intervals": "2020-01-01/2020-02-01",
            "aggregations": {"type": "count", "name": "rows"}
        }));

        assert_eq!(query.intervals, vec!["2020-01-01/2020-02-01".to_string()]);
        assert_eq!(
            query.kind,
            QueryKind::Timeseries {
                aggregations: vec![Aggregation::Count {
                    name: OutputName::Literal("rows".to_string())
                }],
            }
        );
    }

    #[test]
    fn it_parses_nested_query_data_sources() {
        let query = parse(serde_json::json!({
            "queryType": "scan",
            "columns": ["a"],
            "dataSource": {
                "type": "query",
                "query": {
                    "queryType": "groupBy",
                    "dataSource": "inner",
                    "intervals": ["2020-01-01/2020-02-01"],
                    "dimensions": ["a"]
                }
            }
        }));

        let DataSource::Query(inner) = query.data_source else {
            panic!("expected a nested query");
        };
        assert_eq!(inner.data_source, DataSource::Table("inner".to_string()));
        assert!(query.intervals.is_empty());
    }

    #[test]
    fn it_keeps_unknown_query_types() {
        let query = parse(serde_json::json!({
            "queryType": "search",
            "dataSource": "t",
            "intervals": []
        }));
        assert_eq!(query.kind, QueryKind::Unsupported("search".to_string()));
    }

    #[test]
    fn it_parses_topn_metric_specs() {
        let metric: TopNMetric = serde_json::from_value(serde_json::json!({
            "type": "inverted",
            "metric": {"type": "numeric", "metric": "edits"}
        }))
        .unwrap();
        assert_eq!(
            metric,
            TopNMetric::Inverted(Box::new(TopNMetric::Numeric("edits".to_string())))
        );
    }
}
