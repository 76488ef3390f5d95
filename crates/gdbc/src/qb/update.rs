//! UPDATE query builder.

use crate::qb::traits::SqlQb;
use std::fmt;

/// UPDATE query builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateQb {
    /// Table name
    table: String,
    /// SET assignments in first-insertion order
    assignments: Vec<(String, String)>,
    /// Raw WHERE condition
    condition: Option<String>,
}

impl UpdateQb {
    /// Create a new UPDATE builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            assignments: Vec::new(),
            condition: None,
        }
    }

    /// Set `column = value`.
    ///
    /// Setting a column again replaces its value but keeps its original position.
    pub fn set<T: fmt::Display>(mut self, column: &str, value: T) -> Self {
        let value = value.to_string();
        match self.assignments.iter_mut().find(|(c, _)| c == column) {
            Some((_, existing)) => *existing = value,
            None => self.assignments.push((column.to_string(), value)),
        }
        self
    }

    /// Set the WHERE condition, replacing any previous one.
    pub fn r#where(mut self, condition: &str) -> Self {
        self.condition = Some(condition.to_string());
        self
    }
}

impl SqlQb for UpdateQb {
    fn build(&self) -> String {
        let mut sql = format!("UPDATE {} SET ", self.table);
        for (i, (column, value)) in self.assignments.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(column);
            sql.push_str(" = ");
            sql.push_str(value);
        }
        if let Some(condition) = &self.condition {
            sql.push_str(" WHERE ");
            sql.push_str(condition);
        }
        sql
    }
}

impl fmt::Display for UpdateQb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_update() {
        let qb = UpdateQb::new("T").set("a", 1).set("b", 2).r#where("id=5");
        assert_eq!(qb.build(), "UPDATE T SET a = 1, b = 2 WHERE id=5");
    }

    #[test]
    fn test_reset_keeps_position() {
        let qb = UpdateQb::new("T").set("a", 1).set("b", 2).set("a", 3);
        assert_eq!(qb.build(), "UPDATE T SET a = 3, b = 2");
    }

    #[test]
    fn test_mixed_value_types() {
        let qb = UpdateQb::new("users")
            .set("name", "'bob'")
            .set("active", true)
            .set("score", 9.5);
        assert_eq!(
            qb.build(),
            "UPDATE users SET name = 'bob', active = true, score = 9.5"
        );
    }

    #[test]
    fn test_no_assignments_renders_malformed_sql() {
        let qb = UpdateQb::new("users").r#where("id = 1");
        assert_eq!(qb.build(), "UPDATE users SET  WHERE id = 1");
    }
}
