//! Handle the translation of literal values.

use druid_models::ScalarValue;
use query_engine_sql::sql;

/// A value compared for equality or membership. Everything but `null` becomes a string literal.
pub fn translate_literal(value: &ScalarValue) -> sql::ast::Value {
    match value {
        ScalarValue::Null => sql::ast::Value::Null,
        ScalarValue::Bool(b) => sql::ast::Value::String(b.to_string()),
        ScalarValue::Number(n) => sql::ast::Value::String(n.to_string()),
        ScalarValue::String(s) => sql::ast::Value::String(s.clone()),
    }
}

/// A bound endpoint. Numbers, and strings holding a number, are compared numerically.
pub fn translate_bound(value: &ScalarValue) -> sql::ast::Value {
    match value {
        ScalarValue::Number(n) => translate_number(n),
        ScalarValue::String(s) => match s.parse::<serde_json::Number>() {
            Ok(n) => translate_number(&n),
            Err(_) => sql::ast::Value::String(s.clone()),
        },
        other => translate_literal(other),
    }
}

fn translate_number(n: &serde_json::Number) -> sql::ast::Value {
    match (n.as_i64(), n.as_f64()) {
        (Some(i), _) => sql::ast::Value::Int8(i),
        (None, Some(f)) => sql::ast::Value::Float8(f),
        // only reachable with arbitrary precision numbers
        (None, None) => sql::ast::Value::String(n.to_string()),
    }
}
