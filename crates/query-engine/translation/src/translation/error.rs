//! Errors for query translation.

use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported filter type '{0}'.")]
    UnsupportedFilterType(String),
    #[error("Unsupported aggregation type '{0}'.")]
    UnsupportedAggregationType(String),
    #[error("Unsupported query type '{0}'.")]
    UnsupportedQueryType(String),
    #[error("Unsupported search query type '{0}'. Only 'contains' is supported.")]
    UnsupportedSearchQueryType(String),
    #[error("Unsupported data source type '{0}'.")]
    UnsupportedDataSourceType(String),
    #[error("Invalid interval '{0}', expected '<start>/<end>'.")]
    InvalidInterval(String),
    #[error("The query selects no columns.")]
    NoColumns,
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] serde_json::Error),
}
