//! Connections and the builder that opens them.

mod builder;

pub use builder::ConnectionBuilder;

use crate::driver::Session;
use crate::error::{DbError, DbResult};
use crate::row::Rows;

/// Maximum number of SQL bytes included in log events.
const LOG_SQL_MAX: usize = 200;

/// An open database session.
///
/// `Connection` owns exactly one [`Session`]. Statements run synchronously and one at a time;
/// `execute_query` and `execute_update` take `&mut self`, so sharing a connection across threads
/// requires external locking.
///
/// No parameter binding or escaping is done here: SQL text is passed to the driver as-is.
pub struct Connection {
    session: Box<dyn Session>,
    url: String,
}

impl Connection {
    /// Wrap an already-open session.
    pub fn new(session: Box<dyn Session>, url: impl Into<String>) -> Self {
        Self {
            session,
            url: url.into(),
        }
    }

    /// URL this connection was opened with.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run a query and return its rows.
    ///
    /// All rows are read before this returns; the driver's statement resource does not outlive
    /// the call.
    pub fn execute_query(&mut self, sql: impl AsRef<str>) -> DbResult<Rows> {
        let sql = sql.as_ref();
        tracing::debug!(target: "gdbc.sql", kind = "query", sql = %truncate_sql(sql), "executing");

        let rows = self.session.query(sql).map_err(DbError::Execution)?;
        tracing::debug!(target: "gdbc.sql", kind = "query", rows = rows.len(), "done");
        Ok(rows)
    }

    /// Run a data-modifying statement and return the affected row count.
    pub fn execute_update(&mut self, sql: impl AsRef<str>) -> DbResult<u64> {
        let sql = sql.as_ref();
        tracing::debug!(target: "gdbc.sql", kind = "update", sql = %truncate_sql(sql), "executing");

        let affected = self.session.execute(sql).map_err(DbError::Execution)?;
        tracing::debug!(target: "gdbc.sql", kind = "update", affected, "done");
        Ok(affected)
    }

    /// Close the session.
    pub fn disconnect(self) -> DbResult<()> {
        tracing::debug!(target: "gdbc.connect", url = %self.url, "disconnecting");
        self.session.close().map_err(DbError::Connection)
    }

    /// Raw access to the underlying session.
    ///
    /// This bypasses the wrapper entirely. Use [`Session::as_any`] to reach the
    /// driver-specific type.
    pub fn handle(&self) -> &dyn Session {
        self.session.as_ref()
    }

    /// Mutable raw access to the underlying session.
    pub fn handle_mut(&mut self) -> &mut dyn Session {
        self.session.as_mut()
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Truncate SQL on a char boundary for logging.
fn truncate_sql(sql: &str) -> std::borrow::Cow<'_, str> {
    if sql.len() <= LOG_SQL_MAX {
        return sql.into();
    }
    let mut end = LOG_SQL_MAX;
    while !sql.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &sql[..end]).into()
}
