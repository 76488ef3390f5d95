//! Declarative connection settings.
//!
//! ```ignore
//! let config = gdbc::ConnectionConfig::from_toml_str(r#"
//!     vendor = "postgresql"
//!     address = "localhost:5432"
//!     database = "app"
//!     username = "app"
//!     password = "secret"
//!     driver = "postgres"
//! "#)?;
//! let conn = config.into_builder().build()?;
//! ```

use crate::connection::ConnectionBuilder;
use crate::error::DbResult;
use crate::vendor::Vendor;
use serde::Deserialize;
use std::fmt;

/// Connection settings that can be loaded from a config file.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    pub vendor: Vendor,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Driver identifier, resolved through the driver registry.
    #[serde(default)]
    pub driver: Option<String>,
}

impl ConnectionConfig {
    /// Create an empty configuration for `vendor`.
    pub fn new(vendor: Vendor) -> Self {
        Self {
            vendor,
            username: None,
            password: None,
            database: None,
            address: None,
            driver: None,
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> DbResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Turn the configuration into a builder with the same settings.
    pub fn into_builder(self) -> ConnectionBuilder {
        ConnectionBuilder::from_config(&self)
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("vendor", &self.vendor)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("address", &self.address)
            .field("driver", &self.driver)
            .finish()
    }
}
