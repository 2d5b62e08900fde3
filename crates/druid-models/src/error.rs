//! Errors raised while resolving specs at the document boundary.

use thiserror::Error;

/// A spec whose kind we recognise but whose shape is incomplete.
/// These surface through `serde::de::Error::custom`.
#[derive(Debug, Error)]
pub(crate) enum SpecError {
    #[error("'{kind}' spec is missing the field '{field}'")]
    MissingField { kind: String, field: &'static str },
    #[error("unsupported topN metric spec '{0}'")]
    UnsupportedMetricSpec(String),
}
