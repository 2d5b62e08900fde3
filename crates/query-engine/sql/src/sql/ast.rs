//! Type definitions of a SQL AST representation.

/// A SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// `SELECT TOP <n> ...`
    pub top: Option<u64>,
    pub select_list: SelectList,
    pub from: From,
    pub where_: Where,
    pub group_by: GroupBy,
    pub order_by: OrderBy,
}

/// A select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectList {
    SelectList(Vec<SelectItem>),
    SelectStar,
}

/// A single entry of a select list, optionally aliased.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expression: Expression,
    pub alias: Option<ColumnAlias>,
}

/// A FROM clause
#[derive(Debug, Clone, PartialEq)]
pub enum From {
    /// Select from a table
    Table { name: TableName },
    /// Select from a subquery (a derived table)
    Select { select: Box<Select> },
}

/// A WHERE clause. The conditions are combined with `AND`; no conditions means no clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Vec<Expression>);

/// A GROUP BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    pub elements: Vec<Expression>,
}

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: Expression,
    pub direction: OrderByDirection,
}

/// A direction for a single ORDER BY element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

impl OrderByDirection {
    pub fn reverse(self) -> OrderByDirection {
        match self {
            OrderByDirection::Asc => OrderByDirection::Desc,
            OrderByDirection::Desc => OrderByDirection::Asc,
        }
    }
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `a and b and ...`, unparenthesised
    And(Vec<Expression>),
    /// `a or b or ...`, unparenthesised
    Or(Vec<Expression>),
    Not(Box<Expression>),
    /// A parenthesised expression
    Nested(Box<Expression>),
    BinaryOperator {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    BinaryArrayOperator {
        left: Box<Expression>,
        operator: BinaryArrayOperator,
        right: Vec<Expression>,
    },
    IsNull(Box<Expression>),
    FunctionCall {
        function: Function,
        args: Vec<Expression>,
    },
    Count(CountType),
    /// `CASE WHEN <when> THEN <then> END`
    Case {
        when: Box<Expression>,
        then: Box<Expression>,
    },
    ColumnReference(ColumnName),
    Value(Value),
}

/// A comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Like,
}

/// A comparison between a value and a list of values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryArrayOperator {
    In,
}

/// A scalar or aggregate function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Function {
    Contains,
    Sum,
    Max,
    Min,
}

/// The argument of `COUNT`
#[derive(Debug, Clone, PartialEq)]
pub enum CountType {
    Star,
    Simple(Box<Expression>),
    Distinct(Vec<Expression>),
}

/// A literal value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int8(i64),
    Float8(f64),
    String(String),
    /// Quoted as is. The caller is responsible for any escaping.
    RawString(String),
}

/// The name of a table, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub String);

/// The name of a column, emitted as a quoted identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);

/// Aliases that we give to columns
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnAlias {
    pub name: String,
}
