//! # gdbc
//!
//! Vendor-neutral connection builders plus a plain-text SQL statement builder.
//!
//! ## Features
//!
//! - **One builder per connection attempt**: pick a [`Vendor`], set credentials, address,
//!   database and driver identifier, then [`ConnectionBuilder::build`]
//! - **Pluggable drivers**: drivers register under a name via [`inventory`]; PostgreSQL ships
//!   built in (feature `postgres`)
//! - **Synchronous execution**: [`Connection::execute_query`] / [`Connection::execute_update`]
//!   block until the statement completes
//! - **Statement builders**: [`qb`] renders SELECT / INSERT / UPDATE / DELETE text
//!
//! Values and conditions are interpolated verbatim. Nothing is quoted or escaped, so never pass
//! untrusted input to the builders.
//!
//! ## Example
//!
//! ```ignore
//! use gdbc::qb::{self, SqlQb};
//! use gdbc::ConnectionBuilder;
//!
//! let mut conn = ConnectionBuilder::postgres()
//!     .username("app")
//!     .password("secret")
//!     .address("localhost:5432")
//!     .database("app")
//!     .driver("org.postgresql.Driver")
//!     .build()?;
//!
//! let sql = qb::select(["id", "name"]).from("users").r#where("active").build();
//! for row in conn.execute_query(&sql)? {
//!     println!("{:?} {:?}", row.get(0), row.get_by_name("name"));
//! }
//!
//! let affected = conn.execute_update(qb::delete("users").r#where("id = 1").build())?;
//! conn.disconnect()?;
//! ```

pub mod config;
pub mod connection;
pub mod driver;
pub mod error;
pub mod qb;
pub mod row;
pub mod vendor;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use config::ConnectionConfig;
pub use connection::{Connection, ConnectionBuilder};
pub use driver::{Driver, DriverRegistration, Session};
pub use error::{BoxError, DbError, DbResult};
pub use row::{Row, Rows};
pub use vendor::Vendor;

pub use qb::{delete, delete_from, insert, insert_into, select, select_from, update};
pub use qb::{DeleteQb, InsertQb, SelectQb, SqlQb, UpdateQb};

#[cfg(feature = "postgres")]
pub use postgres::{PgDriver, PgSession};

// Re-export inventory for driver registration
pub use inventory;
