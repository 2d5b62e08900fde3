//! Helpers for processing the query and building SQL.

use druid_models::OutputName;
use druid_sql_configuration::Configuration;
use query_engine_sql::sql;

/// The name Druid gives the implicit timestamp column.
const DRUID_TIME_COLUMN: &str = "__time";

/// Static information the translation needs, derived from the configuration.
#[derive(Debug, Clone, Copy)]
pub struct Env<'a> {
    configuration: &'a Configuration,
}

impl<'a> Env<'a> {
    pub fn new(configuration: &'a Configuration) -> Self {
        Env { configuration }
    }

    /// The column that intervals are compared against.
    pub fn time_column(&self) -> &str {
        &self.configuration.time_column
    }

    pub fn interval_combination(&self) -> druid_sql_configuration::IntervalCombination {
        self.configuration.interval_combination
    }

    /// The table a literal data source reads from.
    pub fn table_name(&self, data_source: &str) -> sql::ast::TableName {
        if self.configuration.replace_hyphens_in_table_names {
            sql::ast::TableName(data_source.replace('-', "_"))
        } else {
            sql::ast::TableName(data_source.to_string())
        }
    }

    /// The column a bare dimension name refers to. `__time` is exposed as the time column.
    pub fn bare_column_name(&self, name: &str) -> String {
        if name == DRUID_TIME_COLUMN {
            self.time_column().to_string()
        } else {
            name.to_string()
        }
    }
}

/// The alias an output name resolves to. Literal names have embedded `"` escaped.
pub fn output_name_alias(name: &OutputName) -> sql::ast::ColumnAlias {
    match name {
        OutputName::Literal(name) => sql::helpers::make_column_alias(name.replace('"', "\\\"")),
        OutputName::Structured { name } => sql::helpers::make_column_alias(name.clone()),
    }
}
