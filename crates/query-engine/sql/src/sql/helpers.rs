//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(vec![])
}

/// An empty `GROUP BY` clause.
pub fn empty_group_by() -> GroupBy {
    GroupBy { elements: vec![] }
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

// Aliasing //

/// Create column aliases using this function so we build everything in one place.
pub fn make_column_alias(name: String) -> ColumnAlias {
    ColumnAlias { name }
}

/// A reference to a column by name.
pub fn make_column(name: String) -> Expression {
    Expression::ColumnReference(ColumnName(name))
}

/// A select list entry, aliased when `alias` is given.
pub fn make_select_item(expression: Expression, alias: Option<ColumnAlias>) -> SelectItem {
    SelectItem { expression, alias }
}

// Expressions //

impl Value {
    /// Use a literal as an expression.
    pub fn into_expression(self) -> Expression {
        Expression::Value(self)
    }
}

/// `<left> <operator> <right>`
pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::BinaryOperator {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }
}

/// An inclusive range check on `column`: `<column> >= <lower> and <column> <= <upper>`.
/// Not parenthesised.
pub fn inclusive_range(column: &str, lower: Value, upper: Value) -> Expression {
    Expression::And(vec![
        binary(
            make_column(column.to_string()),
            BinaryOperator::GreaterThanOrEqualTo,
            Expression::Value(lower),
        ),
        binary(
            make_column(column.to_string()),
            BinaryOperator::LessThanOrEqualTo,
            Expression::Value(upper),
        ),
    ])
}

/// Wrap an expression in parentheses.
pub fn nested(expression: Expression) -> Expression {
    Expression::Nested(Box::new(expression))
}

// SELECTs //

/// Build a simple select with a select list and the rest are empty.
pub fn simple_select(select_list: Vec<SelectItem>, from: From) -> Select {
    Select {
        top: None,
        select_list: SelectList::SelectList(select_list),
        from,
        where_: empty_where(),
        group_by: empty_group_by(),
        order_by: empty_order_by(),
    }
}

/// Build a simple select *
pub fn star_select(from: From) -> Select {
    Select {
        top: None,
        select_list: SelectList::SelectStar,
        from,
        where_: empty_where(),
        group_by: empty_group_by(),
        order_by: empty_order_by(),
    }
}
