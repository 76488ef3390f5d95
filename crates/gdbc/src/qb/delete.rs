//! DELETE query builder.

use crate::qb::traits::SqlQb;
use std::fmt;

/// DELETE query builder.
///
/// Unlike guarded builders, a DELETE without a condition renders as-is and removes every row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteQb {
    /// Table name
    table: String,
    /// Raw WHERE condition
    condition: Option<String>,
}

impl DeleteQb {
    /// Create a new DELETE builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            condition: None,
        }
    }

    /// Set the WHERE condition, replacing any previous one.
    pub fn r#where(mut self, condition: &str) -> Self {
        self.condition = Some(condition.to_string());
        self
    }
}

impl SqlQb for DeleteQb {
    fn build(&self) -> String {
        let mut sql = format!("DELETE FROM {}", self.table);
        if let Some(condition) = &self.condition {
            sql.push_str(" WHERE ");
            sql.push_str(condition);
        }
        sql
    }
}

impl fmt::Display for DeleteQb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
