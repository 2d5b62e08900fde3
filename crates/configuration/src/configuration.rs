//! Configuration for the translator.

use crate::values::IntervalCombination;
use crate::version1::DEFAULT_TIME_COLUMN;

/// The 'Configuration' type collects all the information the translator needs at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration'. Keeping the on-disk format separate means the
/// translation logic never deals with format evolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The column holding each row's timestamp.
    pub time_column: String,
    pub interval_combination: IntervalCombination,
    /// Replace `-` with `_` in table names.
    pub replace_hyphens_in_table_names: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            time_column: DEFAULT_TIME_COLUMN.to_string(),
            interval_combination: IntervalCombination::default(),
            replace_hyphens_in_table_names: true,
        }
    }
}
