//! Type definitions of a low-level SQL string representation.

/// A SQL statement under construction.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
}

impl SQL {
    pub fn new() -> SQL {
        SQL::default()
    }

    /// Append raw SQL syntax.
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a double-quoted identifier. The name is not escaped.
    pub fn append_identifier(&mut self, name: &str) {
        self.sql.push('"');
        self.sql.push_str(name);
        self.sql.push('"');
    }

    /// Append a single-quoted string literal, doubling any embedded quote.
    pub fn append_string_literal(&mut self, value: &str) {
        self.sql.push('\'');
        self.sql.push_str(&value.replace('\'', "''"));
        self.sql.push('\'');
    }

    /// Append a single-quoted literal without escaping its content.
    pub fn append_raw_literal(&mut self, value: &str) {
        self.sql.push('\'');
        self.sql.push_str(value);
        self.sql.push('\'');
    }
}
