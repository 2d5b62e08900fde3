//! Translate an incoming native query.

pub mod aggregates;
pub mod columns;
pub mod filtering;
pub mod root;
pub mod sorting;
pub mod values;

use druid_models::{Query, QueryKind};
use druid_sql_configuration::Configuration;
use query_engine_sql::sql;

use crate::translation::error::Error;
use crate::translation::helpers::Env;

/// Translate the incoming query to a SQL SELECT.
pub fn translate(configuration: &Configuration, query: &Query) -> Result<sql::ast::Select, Error> {
    let span = tracing::info_span!("translate", query_type = query_type(&query.kind));
    let _entered = span.enter();

    let select = translate_query(&Env::new(configuration), query)?;

    // log and return
    tracing::debug!("SQL AST: {:?}", select);
    Ok(select)
}

/// Translate a query to sql ast. Called again for every query data source.
pub fn translate_query(env: &Env, query: &Query) -> Result<sql::ast::Select, Error> {
    let (from, mut conditions) =
        root::translate_data_source(env, &query.data_source, &query.intervals)?;

    if let Some(filter) = &query.filter {
        conditions.extend(filtering::translate_filter(filter)?);
    }

    let mut select = match &query.kind {
        QueryKind::Scan { columns } if columns.is_empty() => sql::helpers::star_select(from),
        QueryKind::Scan { columns } => {
            sql::helpers::simple_select(columns::translate_columns(env, columns, true), from)
        }
        QueryKind::Timeseries { aggregations } => {
            let select_list = aggregates::translate_aggregations(env, aggregations)?;
            if select_list.is_empty() {
                return Err(Error::NoColumns);
            }
            sql::helpers::simple_select(select_list, from)
        }
        QueryKind::TopN {
            dimension,
            metric,
            threshold,
            aggregations,
        } => {
            let mut select_list = vec![columns::translate_column(env, dimension, false)];
            select_list.extend(aggregates::translate_aggregations(env, aggregations)?);

            let group_by = columns::translate_dimension(env, dimension);
            let order_by = sorting::translate_metric(metric, &group_by);

            let mut select = sql::helpers::simple_select(select_list, from);
            select.top = Some(*threshold);
            select.group_by = sql::ast::GroupBy {
                elements: vec![group_by],
            };
            select.order_by = sql::ast::OrderBy {
                elements: vec![order_by],
            };
            select
        }
        QueryKind::GroupBy {
            dimensions,
            aggregations,
        } => {
            let mut select_list = columns::translate_columns(env, dimensions, true);
            select_list.extend(aggregates::translate_aggregations(env, aggregations)?);
            if select_list.is_empty() {
                return Err(Error::NoColumns);
            }

            let mut select = sql::helpers::simple_select(select_list, from);
            select.group_by = sql::ast::GroupBy {
                elements: dimensions
                    .iter()
                    .map(|dimension| columns::translate_dimension(env, dimension))
                    .collect(),
            };
            select
        }
        QueryKind::Unsupported(kind) => return Err(Error::UnsupportedQueryType(kind.clone())),
    };

    select.where_ = sql::ast::Where(conditions);
    Ok(select)
}

fn query_type(kind: &QueryKind) -> &str {
    match kind {
        QueryKind::Scan { .. } => "scan",
        QueryKind::Timeseries { .. } => "timeseries",
        QueryKind::TopN { .. } => "topN",
        QueryKind::GroupBy { .. } => "groupBy",
        QueryKind::Unsupported(kind) => kind,
    }
}
