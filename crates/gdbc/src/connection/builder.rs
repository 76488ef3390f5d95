use super::Connection;
use crate::config::ConnectionConfig;
use crate::driver::{self, DriverNotSet, UnsupportedUrl};
use crate::error::{DbError, DbResult};
use crate::vendor::Vendor;
use std::fmt;

/// Builder for a [`Connection`].
///
/// Every setter may be called any number of times in any order; the last value wins. Nothing
/// is checked until [`build`](Self::build), and a missing address or database simply leaves
/// that URL segment empty.
///
/// # Example
///
/// ```ignore
/// let mut conn = gdbc::ConnectionBuilder::postgres()
///     .username("app")
///     .password("secret")
///     .address("localhost:5432")
///     .database("app")
///     .driver("org.postgresql.Driver")
///     .build()?;
/// ```
#[derive(Clone)]
pub struct ConnectionBuilder {
    vendor: Vendor,
    username: Option<String>,
    password: Option<String>,
    database: Option<String>,
    address: Option<String>,
    driver: Option<String>,
}

impl ConnectionBuilder {
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

    /// Builder for Oracle thin-client URLs.
    pub fn oracle() -> Self {
        Self::new(Vendor::Oracle)
    }

    /// Builder for PostgreSQL URLs.
    pub fn postgres() -> Self {
        Self::new(Vendor::PostgreSql)
    }

    /// Builder pre-filled from `config`.
    pub fn from_config(config: &ConnectionConfig) -> Self {
        Self {
            vendor: config.vendor,
            username: config.username.clone(),
            password: config.password.clone(),
            database: config.database.clone(),
            address: config.address.clone(),
            driver: config.driver.clone(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the server address as `host:port`.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Use the vendor's conventional local address.
    pub fn default_address(self) -> Self {
        let address = self.vendor.default_address();
        self.address(address)
    }

    /// Set the identifier of the driver to load.
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    /// The connection URL `build` would use.
    pub fn url(&self) -> String {
        self.vendor.url(
            self.address.as_deref().unwrap_or_default(),
            self.database.as_deref().unwrap_or_default(),
        )
    }

    /// Load the driver and open a connection.
    ///
    /// # Errors
    ///
    /// - [`DbError::DriverLoad`] if no driver identifier is set or none is registered under it.
    ///   No I/O has happened at that point.
    /// - [`DbError::Connection`] if the driver rejects the URL or the session cannot be opened.
    pub fn build(&self) -> DbResult<Connection> {
        let name = self
            .driver
            .as_deref()
            .ok_or_else(|| DbError::driver_load(DriverNotSet))?;
        let driver = driver::find(name).map_err(DbError::driver_load)?;

        let url = self.url();
        tracing::debug!(
            target: "gdbc.connect",
            vendor = %self.vendor,
            driver = driver.name(),
            url = %url,
            "opening connection"
        );

        if !driver.accepts_url(&url) {
            return Err(DbError::connection(UnsupportedUrl {
                driver: driver.name(),
                url,
            }));
        }

        let session = driver
            .connect(&url, self.username.as_deref(), self.password.as_deref())
            .map_err(DbError::Connection)?;

        Ok(Connection::new(session, url))
    }
}

impl fmt::Debug for ConnectionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionBuilder")
            .field("vendor", &self.vendor)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("address", &self.address)
            .field("driver", &self.driver)
            .finish()
    }
}
