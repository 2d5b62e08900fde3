use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the conditions derived from a query's intervals are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum IntervalCombination {
    /// Each interval is a separate condition of the top-level `AND`.
    #[default]
    Conjunctive,
    /// A row may fall into any of the intervals.
    Disjunctive,
}
