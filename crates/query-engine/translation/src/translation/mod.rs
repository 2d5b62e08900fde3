//! Translate an incoming native query document to a SQL SELECT statement.

pub mod error;
pub mod helpers;
pub mod query;

use druid_models::{Aggregation, DimensionSpec, Filter, Query};
use druid_sql_configuration::Configuration;
use query_engine_sql::sql;

use error::Error;
use helpers::Env;

/// Translate a query and render the SQL text.
pub fn convert_to_sql(configuration: &Configuration, query: &Query) -> Result<String, Error> {
    let select = query::translate(configuration, query)?;
    let sql = sql::convert::select_to_sql(&select).sql;
    tracing::info!("Generated SQL: {}", sql);
    Ok(sql)
}

/// Parse a JSON query document, then translate and render it.
pub fn convert_json_to_sql(configuration: &Configuration, document: &str) -> Result<String, Error> {
    let query: Query = serde_json::from_str(document)?;
    convert_to_sql(configuration, &query)
}

/// Render a filter as a boolean SQL expression, or `None` if it has no effect.
pub fn render_filter(filter: &Filter) -> Result<Option<String>, Error> {
    Ok(query::filtering::translate_filter(filter)?.map(|expression| {
        let mut sql = sql::string::SQL::new();
        expression.to_sql(&mut sql);
        sql.sql
    }))
}

/// Render aggregations as `, `-separated select list entries, or `None` if none remain.
pub fn render_aggregations(
    configuration: &Configuration,
    aggregations: &[Aggregation],
) -> Result<Option<String>, Error> {
    let select_list =
        query::aggregates::translate_aggregations(&Env::new(configuration), aggregations)?;
    Ok(if select_list.is_empty() {
        None
    } else {
        Some(render_select_list(select_list))
    })
}

/// Render column references as `, `-separated select list entries.
pub fn render_columns(
    configuration: &Configuration,
    columns: &[DimensionSpec],
    with_alias: bool,
) -> String {
    render_select_list(query::columns::translate_columns(
        &Env::new(configuration),
        columns,
        with_alias,
    ))
}

fn render_select_list(select_list: Vec<sql::ast::SelectItem>) -> String {
    let mut sql = sql::string::SQL::new();
    sql::ast::SelectList::SelectList(select_list).to_sql(&mut sql);
    sql.sql
}
