//! Convert a parsed configuration into the form the translator uses.

use crate::configuration::Configuration;
use crate::error::MakeRuntimeConfigurationError;
use crate::version1::ParsedConfiguration;

/// Validate a parsed configuration and convert it to a runtime `Configuration`.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    if parsed_config.time_column.trim().is_empty() {
        return Err(MakeRuntimeConfigurationError::InvalidValue {
            field: "timeColumn",
            message: "the time column name must not be empty".to_string(),
        });
    }

    Ok(Configuration {
        time_column: parsed_config.time_column,
        interval_combination: parsed_config.interval_combination,
        replace_hyphens_in_table_names: parsed_config.replace_hyphens_in_table_names,
    })
}
