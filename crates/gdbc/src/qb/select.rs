//! SELECT query builder.

use crate::qb::traits::SqlQb;
use std::fmt;

/// SELECT query builder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectQb {
    /// Selected columns, in the order given
    columns: Vec<String>,
    /// FROM table
    table: Option<String>,
    /// Raw WHERE condition
    condition: Option<String>,
}

impl SelectQb {
    /// Create a new SELECT builder for `columns`.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            table: None,
            condition: None,
        }
    }

    /// Set the FROM table, replacing any previous one.
    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Set the WHERE condition, replacing any previous one.
    ///
    /// The clause is emitted whenever a condition has been set, even an empty one.
    pub fn r#where(mut self, condition: &str) -> Self {
        self.condition = Some(condition.to_string());
        self
    }
}

impl SqlQb for SelectQb {
    fn build(&self) -> String {
        let mut sql = String::from("SELECT ");
        sql.push_str(&self.columns.join(", "));
        sql.push_str(" FROM ");
        sql.push_str(self.table.as_deref().unwrap_or_default());
        if let Some(condition) = &self.condition {
            sql.push_str(" WHERE ");
            sql.push_str(condition);
        }
        sql
    }
}

impl fmt::Display for SelectQb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_select() {
        let qb = SelectQb::new(["id", "name"]).from("users");
        assert_eq!(qb.build(), "SELECT id, name FROM users");
    }

    #[test]
    fn test_select_with_where() {
        let qb = SelectQb::new(["*"]).from("users").r#where("age > 18");
        assert_eq!(qb.build(), "SELECT * FROM users WHERE age > 18");
    }

    #[test]
    fn test_where_overwrites() {
        let qb = SelectQb::new(["id"])
            .from("a")
            .r#where("x = 1")
            .from("b")
            .r#where("y = 2");
        assert_eq!(qb.build(), "SELECT id FROM b WHERE y = 2");
    }

    #[test]
    fn test_empty_condition_still_emits_where() {
        let qb = SelectQb::new(["id"]).from("users").r#where("");
        assert_eq!(qb.build(), "SELECT id FROM users WHERE ");
    }

    #[test]
    fn test_missing_table_renders_malformed_sql() {
        let qb = SelectQb::new(["id"]);
        assert_eq!(qb.build(), "SELECT id FROM ");
    }
}
