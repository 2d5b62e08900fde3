//! Boolean filter expressions.

use serde::de;
use serde::{Deserialize, Deserializer};

use crate::tagged;

/// A filter node. Every kind except `And`, `Or` and `Not` is a leaf.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "camelCase")]
pub enum Filter {
    And {
        fields: Vec<Filter>,
    },
    Or {
        fields: Vec<Filter>,
    },
    Not {
        field: Box<Filter>,
    },
    Selector {
        dimension: String,
        #[serde(default)]
        value: ScalarValue,
    },
    Search {
        dimension: String,
        query: SearchQuery,
    },
    Bound {
        dimension: String,
        #[serde(default)]
        lower: Option<ScalarValue>,
        #[serde(default)]
        upper: Option<ScalarValue>,
        #[serde(default, rename = "lowerStrict")]
        lower_strict: bool,
        #[serde(default, rename = "upperStrict")]
        upper_strict: bool,
    },
    In {
        dimension: String,
        values: Vec<ScalarValue>,
    },
    Like {
        dimension: String,
        pattern: String,
    },
    /// A filter type we don't know how to translate.
    #[serde(skip)]
    Unsupported(String),
}

impl Filter {
    const KINDS: [&'static str; 8] = [
        "and", "or", "not", "selector", "search", "bound", "in", "like",
    ];
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match tagged::unsupported_kind(&value, "type", &Filter::KINDS) {
            Some(kind) => Ok(Filter::Unsupported(kind)),
            None => Filter::deserialize(value).map_err(de::Error::custom),
        }
    }
}

/// The query of a `search` filter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "camelCase")]
pub enum SearchQuery {
    Contains {
        value: String,
    },
    #[serde(skip)]
    Unsupported(String),
}

impl<'de> Deserialize<'de> for SearchQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match tagged::unsupported_kind(&value, "type", &["contains"]) {
            Some(kind) => Ok(SearchQuery::Unsupported(kind)),
            None => SearchQuery::deserialize(value).map_err(de::Error::custom),
        }
    }
}

/// A literal compared against a dimension.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}
