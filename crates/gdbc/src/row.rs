//! Result rows returned by [`Connection::execute_query`](crate::Connection::execute_query).
//!
//! Values are carried as text exactly as the server sent them; `NULL` is `None`.

use crate::error::{DbError, DbResult};
use std::str::FromStr;
use std::sync::Arc;

/// A single result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Option<String>>,
}

impl Row {
    pub fn new(columns: Arc<[String]>, values: Vec<Option<String>>) -> Self {
        Self { columns, values }
    }

    /// Column names, shared by every row of the same result.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text value at `idx`. `None` for SQL `NULL` or an out-of-range index.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.values.get(idx).and_then(|v| v.as_deref())
    }

    /// Text value of the first column named `name`.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == name)?;
        self.get(idx)
    }

    /// Parse the value at `idx` into `T`.
    ///
    /// Returns `Ok(None)` for `NULL` and a [`DbError::Decode`] when the index is out of
    /// range or the text does not parse.
    pub fn try_get<T>(&self, idx: usize) -> DbResult<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let column = self.column_label(idx);
        let value = self
            .values
            .get(idx)
            .ok_or_else(|| DbError::decode(&column, "column index out of range"))?;

        match value {
            None => Ok(None),
            Some(text) => text
                .parse::<T>()
                .map(Some)
                .map_err(|e| DbError::decode(column, e.to_string())),
        }
    }

    /// Parse the value of the column named `name` into `T`.
    pub fn try_get_by_name<T>(&self, name: &str) -> DbResult<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let idx = self
            .columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DbError::decode(name, "no such column"))?;
        self.try_get(idx)
    }

    fn column_label(&self, idx: usize) -> String {
        self.columns
            .get(idx)
            .cloned()
            .unwrap_or_else(|| format!("#{idx}"))
    }
}

/// Forward-only cursor over a fully materialized result.
#[derive(Debug)]
pub struct Rows {
    columns: Arc<[String]>,
    rows: std::vec::IntoIter<Row>,
}

impl Rows {
    pub fn new(columns: Arc<[String]>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows: rows.into_iter(),
        }
    }

    /// A result with no columns and no rows.
    pub fn empty() -> Self {
        Self::new(Arc::from(Vec::new()), Vec::new())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.rows.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Rows {}
