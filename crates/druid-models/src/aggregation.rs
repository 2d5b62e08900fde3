//! Aggregation specs.
//!
//! Druid names most aggregators `<inputType><Operation>` (`longSum`, `doubleMax`,
//! `stringFirst`, ...). We classify them by suffix here so the rest of the pipeline
//! only deals with the operation.

use serde::Deserialize;

use crate::dimension::{DimensionSpec, OutputName};
use crate::error::SpecError;
use crate::filter::Filter;

/// A single aggregation spec.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "AggregationSpec")]
pub enum Aggregation {
    /// `cardinality`: distinct count over one or more fields.
    Cardinality {
        name: OutputName,
        fields: Vec<DimensionSpec>,
    },
    /// `count`: row count.
    Count { name: OutputName },
    /// `*Sum`.
    Sum { field_name: String, name: OutputName },
    /// `*Max` and `*Last`.
    Max { field_name: String, name: OutputName },
    /// `*Min` and `*First`.
    Min { field_name: String, name: OutputName },
    /// `filtered`: the inner aggregator over the rows matching `filter`.
    Filtered {
        filter: Filter,
        aggregator: Box<Aggregation>,
    },
    /// An aggregator type we don't know how to translate.
    Unsupported(String),
}

/// The flat shape shared by every aggregator type.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AggregationSpec {
    #[serde(rename = "type")]
    kind: String,
    name: Option<OutputName>,
    field_name: Option<String>,
    fields: Option<Vec<DimensionSpec>>,
    filter: Option<Filter>,
    aggregator: Option<Box<Aggregation>>,
}

fn missing(kind: &str, field: &'static str) -> SpecError {
    SpecError::MissingField {
        kind: kind.to_string(),
        field,
    }
}

impl TryFrom<AggregationSpec> for Aggregation {
    type Error = SpecError;

    fn try_from(spec: AggregationSpec) -> Result<Self, Self::Error> {
        let AggregationSpec {
            kind,
            name,
            field_name,
            fields,
            filter,
            aggregator,
        } = spec;

        let aggregation = if kind == "cardinality" {
            Aggregation::Cardinality {
                name: name.ok_or_else(|| missing(&kind, "name"))?,
                fields: fields.ok_or_else(|| missing(&kind, "fields"))?,
            }
        } else if kind == "count" {
            Aggregation::Count {
                name: name.ok_or_else(|| missing(&kind, "name"))?,
            }
        } else if kind == "filtered" {
            Aggregation::Filtered {
                filter: filter.ok_or_else(|| missing(&kind, "filter"))?,
                aggregator: aggregator.ok_or_else(|| missing(&kind, "aggregator"))?,
            }
        } else if kind.ends_with("Sum") {
            Aggregation::Sum {
                field_name: field_name.ok_or_else(|| missing(&kind, "fieldName"))?,
                name: name.ok_or_else(|| missing(&kind, "name"))?,
            }
        } else if kind.ends_with("Last") || kind.ends_with("Max") {
            Aggregation::Max {
                field_name: field_name.ok_or_else(|| missing(&kind, "fieldName"))?,
                name: name.ok_or_else(|| missing(&kind, "name"))?,
            }
        } else if kind.ends_with("First") || kind.ends_with("Min") {
            Aggregation::Min {
                field_name: field_name.ok_or_else(|| missing(&kind, "fieldName"))?,
                name: name.ok_or_else(|| missing(&kind, "name"))?,
            }
        } else {
            Aggregation::Unsupported(kind)
        };
        Ok(aggregation)
    }
}
