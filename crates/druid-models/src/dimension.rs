//! Dimension specs (column references) and output names.

use serde::de;
use serde::{Deserialize, Deserializer};

use crate::error::SpecError;

/// The name of an output column: a bare string, or an object carrying `name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OutputName {
    Literal(String),
    Structured { name: String },
}

/// A reference to a dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionSpec {
    /// A bare dimension name.
    Name(String),
    /// A structured spec (`default`, `extraction`, ...) naming a dimension and,
    /// optionally, the name of the output column.
    Default {
        dimension: String,
        output_name: Option<OutputName>,
    },
    /// A `*Filtered` wrapper. Only the delegate is rendered.
    Filtered { delegate: Box<DimensionSpec> },
}

impl DimensionSpec {
    /// The spec with every filtered-dimension wrapper removed.
    pub fn unwrap_filtered(&self) -> &DimensionSpec {
        match self {
            DimensionSpec::Filtered { delegate } => delegate.unwrap_filtered(),
            other => other,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StructuredDimensionSpec {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    dimension: Option<String>,
    output_name: Option<OutputName>,
    delegate: Option<Box<DimensionSpec>>,
}

impl TryFrom<StructuredDimensionSpec> for DimensionSpec {
    type Error = SpecError;

    fn try_from(spec: StructuredDimensionSpec) -> Result<Self, Self::Error> {
        let kind = spec.kind.unwrap_or_else(|| "default".to_string());
        if kind.ends_with("Filtered") {
            let delegate = spec.delegate.ok_or(SpecError::MissingField {
                kind,
                field: "delegate",
            })?;
            Ok(DimensionSpec::Filtered { delegate })
        } else {
            let dimension = spec.dimension.ok_or(SpecError::MissingField {
                kind,
                field: "dimension",
            })?;
            Ok(DimensionSpec::Default {
                dimension,
                output_name: spec.output_name,
            })
        }
    }
}

impl<'de> Deserialize<'de> for DimensionSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(name) => Ok(DimensionSpec::Name(name)),
            value => StructuredDimensionSpec::deserialize(value)
                .map_err(de::Error::custom)?
                .try_into()
                .map_err(de::Error::custom),
        }
    }
}
