//! Trait definitions for query builders.

use crate::error::DbResult;

/// Base trait for all query builders.
pub trait SqlQb {
    /// Render the SQL string.
    ///
    /// Rendering never fails and has no side effects; calling it repeatedly without further
    /// mutation returns the same text.
    fn build(&self) -> String;

    /// Debug helper to get the SQL string.
    fn to_sql(&self) -> String {
        self.build()
    }

    /// Check builder state before execution.
    ///
    /// `build` never calls this; malformed input still renders.
    fn validate(&self) -> DbResult<()> {
        Ok(())
    }
}
