//! Typed model of a Druid native query document.
//!
//! Tagged unions are resolved once, while deserializing. A discriminator we don't
//! recognise is kept as an `Unsupported` variant carrying its value, so the
//! translator can reject it with a precise error instead of a parse failure.

pub mod aggregation;
pub mod data_source;
pub mod dimension;
pub mod filter;
pub mod query;
mod error;
mod tagged;

pub use aggregation::Aggregation;
pub use data_source::DataSource;
pub use dimension::{DimensionSpec, OutputName};
pub use filter::{Filter, ScalarValue, SearchQuery};
pub use query::{Query, QueryKind, TopNMetric};
