//! Handle aggregation translation.

use druid_models::{Aggregation, DimensionSpec, OutputName};
use query_engine_sql::sql;

use super::columns::translate_dimension;
use super::filtering::translate_filter;
use crate::translation::error::Error;
use crate::translation::helpers::{output_name_alias, Env};

/// Translate a list of aggregations into select list entries.
/// Filtered aggregations whose filter has no effect are left out.
pub fn translate_aggregations(
    env: &Env,
    aggregations: &[Aggregation],
) -> Result<Vec<sql::ast::SelectItem>, Error> {
    let mut select_items = vec![];
    for aggregation in aggregations {
        if let Some(select_item) = translate_aggregation(env, aggregation)? {
            select_items.push(select_item);
        }
    }
    Ok(select_items)
}

/// Translate a single aggregation, aliased by its output name.
pub fn translate_aggregation(
    env: &Env,
    aggregation: &Aggregation,
) -> Result<Option<sql::ast::SelectItem>, Error> {
    match aggregation {
        Aggregation::Filtered { filter, aggregator } => {
            // an unsupported aggregator is rejected even when the filter has no effect
            let (name, operation) = operation(aggregator)?;
            Ok(translate_filter(filter)?.map(|condition| {
                sql::helpers::make_select_item(
                    operation.into_expression(env, Some(condition)),
                    Some(output_name_alias(name)),
                )
            }))
        }
        aggregation => {
            let (name, operation) = operation(aggregation)?;
            Ok(Some(sql::helpers::make_select_item(
                operation.into_expression(env, None),
                Some(output_name_alias(name)),
            )))
        }
    }
}

/// What an aggregator computes, independent of any filter on it.
enum Operation<'a> {
    CountRows,
    CountDistinct(&'a [DimensionSpec]),
    Apply(sql::ast::Function, &'a str),
}

fn operation(aggregation: &Aggregation) -> Result<(&OutputName, Operation<'_>), Error> {
    match aggregation {
        Aggregation::Count { name } => Ok((name, Operation::CountRows)),
        Aggregation::Cardinality { name, fields } => Ok((name, Operation::CountDistinct(fields))),
        Aggregation::Sum { field_name, name } => {
            Ok((name, Operation::Apply(sql::ast::Function::Sum, field_name)))
        }
        Aggregation::Max { field_name, name } => {
            Ok((name, Operation::Apply(sql::ast::Function::Max, field_name)))
        }
        Aggregation::Min { field_name, name } => {
            Ok((name, Operation::Apply(sql::ast::Function::Min, field_name)))
        }
        // a filtered aggregator cannot wrap another one
        Aggregation::Filtered { .. } => {
            Err(Error::UnsupportedAggregationType("filtered".to_string()))
        }
        Aggregation::Unsupported(kind) => Err(Error::UnsupportedAggregationType(kind.clone())),
    }
}

impl Operation<'_> {
    /// The aggregate expression. With a condition, every input is guarded by
    /// `CASE WHEN <condition> THEN <input> END`.
    fn into_expression(
        self,
        env: &Env,
        condition: Option<sql::ast::Expression>,
    ) -> sql::ast::Expression {
        let guard = |input: sql::ast::Expression| match &condition {
            None => input,
            Some(condition) => sql::ast::Expression::Case {
                when: Box::new(condition.clone()),
                then: Box::new(input),
            },
        };
        match self {
            Operation::CountRows if condition.is_none() => {
                sql::ast::Expression::Count(sql::ast::CountType::Star)
            }
            Operation::CountRows => sql::ast::Expression::Count(sql::ast::CountType::Simple(
                Box::new(guard(sql::ast::Value::Int8(1).into_expression())),
            )),
            Operation::CountDistinct(fields) => {
                sql::ast::Expression::Count(sql::ast::CountType::Distinct(
                    fields
                        .iter()
                        .map(|field| guard(translate_dimension(env, field)))
                        .collect(),
                ))
            }
            Operation::Apply(function, field_name) => sql::ast::Expression::FunctionCall {
                function,
                args: vec![guard(sql::helpers::make_column(field_name.to_string()))],
            },
        }
    }
}
