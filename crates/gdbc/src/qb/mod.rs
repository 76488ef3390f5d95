//! Plain-text SQL statement builders.
//!
//! Each builder accumulates clauses and renders a SQL string with [`SqlQb::build`]. Values and
//! conditions are interpolated exactly as given: nothing is quoted, escaped or validated, so
//! callers must supply values already in SQL-literal form (e.g. `"'alice'"`).
//!
//! # Usage
//!
//! ```ignore
//! use gdbc::qb::{self, SqlQb};
//!
//! // SELECT
//! let sql = qb::select(["id", "name"]).from("users").r#where("status = 'active'").build();
//!
//! // INSERT
//! let sql = qb::insert("users")
//!     .columns(["id", "name"])
//!     .value(1)
//!     .value("'alice'")
//!     .build();
//!
//! // UPDATE
//! let sql = qb::update("users").set("status", "'inactive'").r#where("id = 1").build();
//!
//! // DELETE
//! let sql = qb::delete("users").r#where("id = 1").build();
//! ```

mod delete;
mod insert;
mod select;
mod traits;
mod update;

pub use delete::DeleteQb;
pub use insert::InsertQb;
pub use select::SelectQb;
pub use traits::SqlQb;
pub use update::UpdateQb;

/// Create a SELECT builder for the given columns.
///
/// # Example
/// ```ignore
/// let qb = gdbc::qb::select(["id", "name"]).from("users");
/// ```
pub fn select<I, S>(columns: I) -> SelectQb
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SelectQb::new(columns)
}

/// Create a `SELECT *` builder for the given table.
///
/// # Example
/// ```ignore
/// let qb = gdbc::qb::select_from("users").r#where("id = 1");
/// ```
pub fn select_from(table: &str) -> SelectQb {
    SelectQb::new(["*"]).from(table)
}

/// Create an INSERT builder for the given table.
///
/// # Example
/// ```ignore
/// let qb = gdbc::qb::insert("users").columns(["id"]).value(1);
/// ```
pub fn insert(table: &str) -> InsertQb {
    InsertQb::new(table)
}

/// Alias for `insert`.
pub fn insert_into(table: &str) -> InsertQb {
    InsertQb::new(table)
}

/// Create an UPDATE builder for the given table.
///
/// # Example
/// ```ignore
/// let qb = gdbc::qb::update("users").set("status", "'inactive'").r#where("id = 1");
/// ```
pub fn update(table: &str) -> UpdateQb {
    UpdateQb::new(table)
}

/// Create a DELETE builder for the given table.
///
/// Without a condition the statement deletes every row.
pub fn delete(table: &str) -> DeleteQb {
    DeleteQb::new(table)
}

/// Alias for `delete`.
pub fn delete_from(table: &str) -> DeleteQb {
    DeleteQb::new(table)
}

#[cfg(test)]
mod tests;
