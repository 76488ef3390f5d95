//! Supported database vendors and their connection URL templates.

use crate::error::DbError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A database vendor.
///
/// Vendors differ only in the URL they assemble from an address and a database name.
/// Parsing and deserialization accept the same names, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Vendor {
    /// Oracle thin-client URLs: `jdbc:oracle:thin:@//<address>/<database>`
    Oracle,
    /// PostgreSQL URLs: `jdbc:postgresql://<address>/<database>`
    PostgreSql,
}

impl Vendor {
    /// Fixed scheme prefix placed before the address.
    pub fn scheme(self) -> &'static str {
        match self {
            Vendor::Oracle => "jdbc:oracle:thin:@//",
            Vendor::PostgreSql => "jdbc:postgresql://",
        }
    }

    /// Conventional local address of a server for this vendor.
    pub fn default_address(self) -> &'static str {
        match self {
            Vendor::Oracle => "localhost:1521",
            Vendor::PostgreSql => "localhost:5432",
        }
    }

    /// Render the connection URL for `address` and `database`.
    ///
    /// No escaping or validation is applied.
    pub fn url(self, address: &str, database: &str) -> String {
        let scheme = self.scheme();
        let mut url = String::with_capacity(scheme.len() + address.len() + database.len() + 1);
        url.push_str(scheme);
        url.push_str(address);
        url.push('/');
        url.push_str(database);
        url
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::Oracle => "oracle",
            Vendor::PostgreSql => "postgresql",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "oracle" => Ok(Vendor::Oracle),
            "postgresql" | "postgres" => Ok(Vendor::PostgreSql),
            other => Err(DbError::Config(format!("unknown vendor: {other}"))),
        }
    }
}

impl TryFrom<String> for Vendor {
    type Error = DbError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
