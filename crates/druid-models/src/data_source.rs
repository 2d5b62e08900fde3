//! Query data sources.

use serde::de;
use serde::{Deserialize, Deserializer};

use crate::error::SpecError;
use crate::query::Query;

/// Where a query reads its rows from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// A table, given by name or as `{"type": "table", "name": ...}`.
    Table(String),
    /// A nested query, `{"type": "query", "query": ...}`.
    Query(Box<Query>),
    /// A data source type we don't know how to translate.
    Unsupported(String),
}

#[derive(Deserialize)]
struct DataSourceObject {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    name: Option<String>,
    query: Option<Box<Query>>,
}

impl TryFrom<DataSourceObject> for DataSource {
    type Error = SpecError;

    fn try_from(object: DataSourceObject) -> Result<Self, Self::Error> {
        let missing = |kind: &str, field| SpecError::MissingField {
            kind: kind.to_string(),
            field,
        };
        match object.kind.as_deref() {
            Some("table") => object
                .name
                .map(DataSource::Table)
                .ok_or_else(|| missing("table", "name")),
            Some("query") | None => object
                .query
                .map(DataSource::Query)
                .ok_or_else(|| missing("query", "query")),
            Some(other) => Ok(DataSource::Unsupported(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for DataSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(name) => Ok(DataSource::Table(name)),
            value => DataSourceObject::deserialize(value)
                .map_err(de::Error::custom)?
                .try_into()
                .map_err(de::Error::custom),
        }
    }
}
