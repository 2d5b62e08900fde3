//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::string::SQL;

/// Render a SELECT to text.
pub fn select_to_sql(select: &Select) -> SQL {
    let mut sql = SQL::new();
    select.to_sql(&mut sql);
    sql
}

/// Render `items`, separated by `separator`.
fn append_separated<T>(
    sql: &mut SQL,
    items: &[T],
    separator: &str,
    mut render: impl FnMut(&T, &mut SQL),
) {
    for (index, item) in items.iter().enumerate() {
        render(item, sql);
        if index < (items.len() - 1) {
            sql.append_syntax(separator);
        }
    }
}

// Convert to SQL strings

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");

        if let Some(top) = self.top {
            sql.append_syntax("TOP ");
            sql.append_syntax(&top.to_string());
            sql.append_syntax(" ");
        }

        self.select_list.to_sql(sql);

        sql.append_syntax(" ");

        self.from.to_sql(sql);

        self.where_.to_sql(sql);

        self.group_by.to_sql(sql);

        self.order_by.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::SelectList(select_list) => {
                append_separated(sql, select_list, ", ", SelectItem::to_sql);
            }
            SelectList::SelectStar => {
                sql.append_syntax("*");
            }
        }
    }
}

impl SelectItem {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.expression.to_sql(sql);
        if let Some(alias) = &self.alias {
            sql.append_syntax(" AS ");
            alias.to_sql(sql);
        }
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("FROM ");
        match &self {
            From::Table { name } => name.to_sql(sql),
            From::Select { select } => {
                sql.append_syntax("(");
                select.to_sql(sql);
                sql.append_syntax(")");
            }
        }
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(conditions) = self;
        if !conditions.is_empty() {
            sql.append_syntax(" WHERE ");
            append_separated(sql, conditions, " AND ", Expression::to_sql);
        }
    }
}

impl GroupBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" GROUP BY ");
            append_separated(sql, &self.elements, ", ", Expression::to_sql);
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            append_separated(sql, &self.elements, ", ", OrderByElement::to_sql);
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.target.to_sql(sql);
        self.direction.to_sql(sql);
    }
}

impl OrderByDirection {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            OrderByDirection::Asc => sql.append_syntax(" ASC"),
            OrderByDirection::Desc => sql.append_syntax(" DESC"),
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::ColumnReference(column_name) => column_name.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
            Expression::And(operands) => {
                append_separated(sql, operands, " and ", Expression::to_sql);
            }
            Expression::Or(operands) => {
                append_separated(sql, operands, " or ", Expression::to_sql);
            }
            Expression::Not(expr) => {
                sql.append_syntax("not ");
                expr.to_sql(sql);
            }
            Expression::Nested(expr) => {
                sql.append_syntax("(");
                expr.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::BinaryOperator {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::BinaryArrayOperator {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                sql.append_syntax("(");
                append_separated(sql, right, ", ", Expression::to_sql);
                sql.append_syntax(")");
            }
            Expression::IsNull(expr) => {
                expr.to_sql(sql);
                sql.append_syntax(" IS NULL");
            }
            Expression::FunctionCall { function, args } => {
                function.to_sql(sql);
                sql.append_syntax("(");
                append_separated(sql, args, ", ", Expression::to_sql);
                sql.append_syntax(")");
            }
            Expression::Count(count_type) => {
                sql.append_syntax("COUNT");
                sql.append_syntax("(");
                count_type.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::Case { when, then } => {
                sql.append_syntax("CASE WHEN ");
                when.to_sql(sql);
                sql.append_syntax(" THEN ");
                then.to_sql(sql);
                sql.append_syntax(" END");
            }
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            BinaryOperator::Equals => sql.append_syntax(" = "),
            BinaryOperator::GreaterThan => sql.append_syntax(" > "),
            BinaryOperator::GreaterThanOrEqualTo => sql.append_syntax(" >= "),
            BinaryOperator::LessThan => sql.append_syntax(" < "),
            BinaryOperator::LessThanOrEqualTo => sql.append_syntax(" <= "),
            BinaryOperator::Like => sql.append_syntax(" like "),
        }
    }
}

impl BinaryArrayOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            BinaryArrayOperator::In => sql.append_syntax(" in "),
        }
    }
}

impl Function {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Function::Contains => sql.append_syntax("contains"),
            Function::Sum => sql.append_syntax("SUM"),
            Function::Max => sql.append_syntax("MAX"),
            Function::Min => sql.append_syntax("MIN"),
        }
    }
}

impl CountType {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            CountType::Star => sql.append_syntax("*"),
            CountType::Simple(expression) => expression.to_sql(sql),
            CountType::Distinct(expressions) => {
                sql.append_syntax("DISTINCT ");
                append_separated(sql, expressions, ", ", Expression::to_sql);
            }
        }
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Value::Null => sql.append_syntax("NULL"),
            Value::Int8(i) => sql.append_syntax(&i.to_string()),
            Value::Float8(n) => sql.append_syntax(&n.to_string()),
            Value::String(s) => sql.append_string_literal(s),
            Value::RawString(s) => sql.append_raw_literal(s),
        }
    }
}

// names
impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let TableName(name) = self;
        sql.append_syntax(name);
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let ColumnName(name) = self;
        sql.append_identifier(name);
    }
}

impl ColumnAlias {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.name);
    }
}
