//! Error types for gdbc

use thiserror::Error;

/// Boxed error produced by a driver or session.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for gdbc operations
pub type DbResult<T> = Result<T, DbError>;

/// Error types for connection and execution failures.
///
/// The wrapped cause of `DriverLoad`, `Connection` and `Execution` is kept intact and is
/// reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum DbError {
    /// The driver identifier was missing or could not be resolved
    #[error("Failed to load database driver: {0}")]
    DriverLoad(#[source] BoxError),

    /// Opening or closing the session failed
    #[error("Connection error: {0}")]
    Connection(#[source] BoxError),

    /// Query or update execution failed
    #[error("Execution error: {0}")]
    Execution(#[source] BoxError),

    /// Row value could not be converted
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Builder state failed an explicit validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Connection configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl DbError {
    /// Wrap a driver lookup failure
    pub fn driver_load(err: impl Into<BoxError>) -> Self {
        Self::DriverLoad(err.into())
    }

    /// Wrap a session establishment failure
    pub fn connection(err: impl Into<BoxError>) -> Self {
        Self::Connection(err.into())
    }

    /// Wrap a statement execution failure
    pub fn execution(err: impl Into<BoxError>) -> Self {
        Self::Execution(err.into())
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_driver_load(&self) -> bool {
        matches!(self, Self::DriverLoad(_))
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    pub fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }
}

impl From<toml::de::Error> for DbError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
