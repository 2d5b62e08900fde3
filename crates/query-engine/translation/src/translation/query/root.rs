//! Handle the data source of a query and the time intervals it is restricted to.

use druid_models::{DataSource, Query};
use druid_sql_configuration::IntervalCombination;
use query_engine_sql::sql;

use super::translate_query;
use crate::translation::error::Error;
use crate::translation::helpers::Env;

/// Translate the data source into a FROM clause, and the conditions its intervals impose.
/// Intervals only restrict table scans: a query data source is restricted by its own intervals.
pub fn translate_data_source(
    env: &Env,
    data_source: &DataSource,
    intervals: &[String],
) -> Result<(sql::ast::From, Vec<sql::ast::Expression>), Error> {
    match data_source {
        DataSource::Table(name) => Ok((
            sql::ast::From::Table {
                name: env.table_name(name),
            },
            translate_intervals(env, intervals)?,
        )),
        DataSource::Query(query) => Ok((translate_derived_table(env, query)?, vec![])),
        DataSource::Unsupported(kind) => Err(Error::UnsupportedDataSourceType(kind.clone())),
    }
}

fn translate_derived_table(env: &Env, query: &Query) -> Result<sql::ast::From, Error> {
    Ok(sql::ast::From::Select {
        select: Box::new(translate_query(env, query)?),
    })
}

/// One inclusive range over the time column per interval, combined as configured.
pub fn translate_intervals(
    env: &Env,
    intervals: &[String],
) -> Result<Vec<sql::ast::Expression>, Error> {
    let ranges = intervals
        .iter()
        .map(|interval| translate_interval(env, interval))
        .collect::<Result<Vec<_>, Error>>()?;

    match env.interval_combination() {
        IntervalCombination::Disjunctive if ranges.len() > 1 => {
            Ok(vec![sql::helpers::nested(sql::ast::Expression::Or(
                ranges.into_iter().map(sql::helpers::nested).collect(),
            ))])
        }
        IntervalCombination::Conjunctive | IntervalCombination::Disjunctive => Ok(ranges),
    }
}

/// `<start>/<end>` becomes `"time" >= '<start>' and "time" <= '<end>'`.
fn translate_interval(env: &Env, interval: &str) -> Result<sql::ast::Expression, Error> {
    match interval.split_once('/') {
        Some((start, end)) if !end.contains('/') => Ok(sql::helpers::inclusive_range(
            env.time_column(),
            sql::ast::Value::String(start.to_string()),
            sql::ast::Value::String(end.to_string()),
        )),
        _ => Err(Error::InvalidInterval(interval.to_string())),
    }
}
