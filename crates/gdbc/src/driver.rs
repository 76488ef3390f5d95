//! Driver registry and the session contract drivers implement.
//!
//! A [`Driver`] turns a connection URL plus credentials into a live [`Session`]. Drivers are
//! registered under a name with [`inventory::submit!`] and resolved by that name when a
//! [`ConnectionBuilder`](crate::ConnectionBuilder) is built.
//!
//! # Example
//!
//! ```ignore
//! use gdbc::driver::{Driver, DriverRegistration, Session};
//!
//! struct MyDriver;
//!
//! impl Driver for MyDriver {
//!     fn name(&self) -> &'static str { "my-driver" }
//!     fn accepts_url(&self, url: &str) -> bool { url.starts_with("jdbc:oracle:") }
//!     fn connect(&self, url: &str, user: Option<&str>, password: Option<&str>)
//!         -> Result<Box<dyn Session>, gdbc::BoxError> { todo!() }
//! }
//!
//! gdbc::inventory::submit! {
//!     DriverRegistration::new("oracle.jdbc.OracleDriver", &MyDriver)
//! }
//! ```

use crate::error::BoxError;
use crate::row::Rows;
use std::any::Any;
use thiserror::Error;

/// A live database session opened by a [`Driver`].
///
/// Each call runs one statement to completion before returning. Any statement resource the
/// session allocates is released before the call returns, so query results must be fully read
/// into [`Rows`].
pub trait Session: Send {
    /// Run `sql` as a query and return every result row.
    fn query(&mut self, sql: &str) -> Result<Rows, BoxError>;

    /// Run `sql` as a data-modifying statement and return the affected row count.
    fn execute(&mut self, sql: &str) -> Result<u64, BoxError>;

    /// Close the session.
    fn close(self: Box<Self>) -> Result<(), BoxError>;

    /// Access the concrete session type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable access to the concrete session type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A loadable database driver.
pub trait Driver: Send + Sync {
    /// Human-readable driver name, used in logs.
    fn name(&self) -> &'static str;

    /// Whether this driver understands `url`.
    fn accepts_url(&self, url: &str) -> bool;

    /// Open a session. Called at most once per build, with no retry.
    fn connect(
        &self,
        url: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Box<dyn Session>, BoxError>;
}

/// Registration entry binding a driver identifier to a driver.
pub struct DriverRegistration {
    /// Identifier passed to [`ConnectionBuilder::driver`](crate::ConnectionBuilder::driver).
    pub name: &'static str,
    pub driver: &'static dyn Driver,
}

impl DriverRegistration {
    pub const fn new(name: &'static str, driver: &'static dyn Driver) -> Self {
        Self { name, driver }
    }
}

inventory::collect!(DriverRegistration);

/// No driver is registered under the requested identifier.
#[derive(Debug, Error)]
#[error("no driver registered under '{0}'")]
pub struct DriverNotFound(pub String);

/// No driver identifier was configured on the builder.
#[derive(Debug, Error)]
#[error("no driver identifier set")]
pub struct DriverNotSet;

/// The resolved driver does not understand the connection URL.
#[derive(Debug, Error)]
#[error("driver '{driver}' does not accept url '{url}'")]
pub struct UnsupportedUrl {
    pub driver: &'static str,
    pub url: String,
}

/// Resolve a driver by identifier.
pub fn find(name: &str) -> Result<&'static dyn Driver, DriverNotFound> {
    inventory::iter::<DriverRegistration>
        .into_iter()
        .find(|reg| reg.name == name)
        .map(|reg| reg.driver)
        .ok_or_else(|| DriverNotFound(name.to_string()))
}

/// Identifiers of every registered driver, sorted.
pub fn registered() -> Vec<&'static str> {
    let mut names: Vec<_> = inventory::iter::<DriverRegistration>
        .into_iter()
        .map(|reg| reg.name)
        .collect();
    names.sort_unstable();
    names
}
