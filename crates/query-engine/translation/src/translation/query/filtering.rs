//! Handle filter translation.
//!
//! A filter that has no effect translates to `None`. Connectives drop such
//! children and have no effect themselves when nothing survives.

use druid_models::{Filter, SearchQuery};
use query_engine_sql::sql;

use super::values;
use crate::translation::error::Error;

/// Translate a filter into a boolean expression, or `None` if it has no effect.
pub fn translate_filter(filter: &Filter) -> Result<Option<sql::ast::Expression>, Error> {
    match filter {
        Filter::And { fields } => Ok(translate_connective(fields)?.map(|operands| {
            sql::helpers::nested(sql::ast::Expression::And(operands))
        })),
        Filter::Or { fields } => Ok(translate_connective(fields)?
            .map(|operands| sql::helpers::nested(sql::ast::Expression::Or(operands)))),
        Filter::Not { field } => Ok(translate_filter(field)?
            .map(|expression| sql::ast::Expression::Not(Box::new(expression)))),
        Filter::Selector { dimension, value } => {
            let target = column(dimension);
            Ok(Some(match values::translate_literal(value) {
                sql::ast::Value::Null => sql::ast::Expression::IsNull(Box::new(target)),
                value => sql::helpers::binary(
                    target,
                    sql::ast::BinaryOperator::Equals,
                    value.into_expression(),
                ),
            }))
        }
        Filter::Search { dimension, query } => match query {
            SearchQuery::Contains { value } => Ok(Some(sql::ast::Expression::FunctionCall {
                function: sql::ast::Function::Contains,
                args: vec![
                    column(dimension),
                    sql::ast::Value::String(value.clone()).into_expression(),
                ],
            })),
            SearchQuery::Unsupported(kind) => Err(Error::UnsupportedSearchQueryType(kind.clone())),
        },
        Filter::Bound {
            dimension,
            lower,
            upper,
            lower_strict,
            upper_strict,
        } => {
            let lower = lower.as_ref().map(|lower| {
                let operator = if *lower_strict {
                    sql::ast::BinaryOperator::GreaterThan
                } else {
                    sql::ast::BinaryOperator::GreaterThanOrEqualTo
                };
                sql::helpers::binary(
                    column(dimension),
                    operator,
                    values::translate_bound(lower).into_expression(),
                )
            });
            let upper = upper.as_ref().map(|upper| {
                let operator = if *upper_strict {
                    sql::ast::BinaryOperator::LessThan
                } else {
                    sql::ast::BinaryOperator::LessThanOrEqualTo
                };
                sql::helpers::binary(
                    column(dimension),
                    operator,
                    values::translate_bound(upper).into_expression(),
                )
            });
            Ok(match (lower, upper) {
                (Some(lower), Some(upper)) => Some(sql::helpers::nested(
                    sql::ast::Expression::And(vec![lower, upper]),
                )),
                (Some(comparison), None) | (None, Some(comparison)) => Some(comparison),
                (None, None) => None,
            })
        }
        Filter::In {
            dimension,
            values: literals,
        } => Ok(Some(sql::ast::Expression::BinaryArrayOperator {
            left: Box::new(column(dimension)),
            operator: sql::ast::BinaryArrayOperator::In,
            right: literals
                .iter()
                .map(|value| values::translate_literal(value).into_expression())
                .collect(),
        })),
        Filter::Like { dimension, pattern } => Ok(Some(sql::helpers::binary(
            column(dimension),
            sql::ast::BinaryOperator::Like,
            sql::ast::Value::RawString(pattern.clone()).into_expression(),
        ))),
        Filter::Unsupported(kind) => Err(Error::UnsupportedFilterType(kind.clone())),
    }
}

/// The operands of an `and`/`or` that have an effect, or `None` if there are none.
fn translate_connective(fields: &[Filter]) -> Result<Option<Vec<sql::ast::Expression>>, Error> {
    let mut operands = vec![];
    for field in fields {
        if let Some(operand) = translate_filter(field)? {
            operands.push(operand);
        }
    }
    Ok(if operands.is_empty() {
        None
    } else {
        Some(operands)
    })
}

fn column(dimension: &str) -> sql::ast::Expression {
    sql::helpers::make_column(dimension.to_string())
}
