//! INSERT query builder.

use crate::error::{DbError, DbResult};
use crate::qb::traits::SqlQb;
use std::fmt;

/// INSERT query builder.
///
/// Columns and values are two independent append-only lists. They are not paired, so
/// `columns(["a", "b"])` with a single value still renders; use [`SqlQb::validate`] to catch
/// the mismatch before execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertQb {
    /// Table name
    table: String,
    /// Column names, in append order
    columns: Vec<String>,
    /// Rendered values, in append order
    values: Vec<String>,
}

impl InsertQb {
    /// Create a new INSERT builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append column names.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append one value, rendered with `Display` and no quoting.
    pub fn value<T: fmt::Display>(mut self, value: T) -> Self {
        self.values.push(value.to_string());
        self
    }

    /// Append several values, each rendered with `Display` and no quoting.
    ///
    /// Values of different types can be mixed as `&dyn Display` items:
    ///
    /// ```ignore
    /// use std::fmt::Display;
    ///
    /// let qb = gdbc::qb::insert("T")
    ///     .columns(["a", "b"])
    ///     .values([&1 as &dyn Display, &"x"]);
    /// assert_eq!(qb.build(), "INSERT INTO T (a, b) VALUES (1, x)");
    /// ```
    pub fn values<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        self.values.extend(values.into_iter().map(|v| v.to_string()));
        self
    }
}

impl SqlQb for InsertQb {
    fn build(&self) -> String {
        let mut sql = format!("INSERT INTO {} (", self.table);
        sql.push_str(&self.columns.join(", "));
        sql.push_str(") VALUES (");
        sql.push_str(&self.values.join(", "));
        sql.push(')');
        sql
    }

    fn validate(&self) -> DbResult<()> {
        if self.columns.len() != self.values.len() {
            return Err(DbError::validation(format!(
                "INSERT INTO {}: {} columns but {} values",
                self.table,
                self.columns.len(),
                self.values.len()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for InsertQb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_insert() {
        let qb = InsertQb::new("users")
            .columns(["username", "email"])
            .value("'alice'")
            .value("'alice@example.com'");
        assert_eq!(
            qb.build(),
            "INSERT INTO users (username, email) VALUES ('alice', 'alice@example.com')"
        );
    }

    #[test]
    fn test_values_are_not_quoted() {
        let qb = InsertQb::new("T").columns(["a", "b"]).value(1).value("x");
        assert_eq!(qb.build(), "INSERT INTO T (a, b) VALUES (1, x)");
    }

    #[test]
    fn test_mixed_values_in_one_call() {
        let qb = InsertQb::new("T")
            .columns(["a", "b", "c"])
            .values([&1 as &dyn fmt::Display, &"x", &2.5]);
        assert_eq!(qb.build(), "INSERT INTO T (a, b, c) VALUES (1, x, 2.5)");
        assert!(qb.validate().is_ok());
    }

    #[test]
    fn test_columns_and_values_accumulate() {
        let qb = InsertQb::new("T")
            .columns(["a"])
            .columns(["b"])
            .values([1])
            .values([2]);
        assert_eq!(qb.build(), "INSERT INTO T (a, b) VALUES (1, 2)");
    }

    #[test]
    fn test_mismatch_renders_but_fails_validation() {
        let qb = InsertQb::new("T").columns(["a", "b"]).value(1);
        assert_eq!(qb.build(), "INSERT INTO T (a, b) VALUES (1)");

        let err = qb.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: INSERT INTO T: 2 columns but 1 values"
        );
    }

    #[test]
    fn test_matching_lengths_validate() {
        let qb = InsertQb::new("T").columns(["a", "b"]).values([1.5, 2.0]);
        assert!(qb.validate().is_ok());
        assert_eq!(qb.build(), "INSERT INTO T (a, b) VALUES (1.5, 2)");
    }
}
