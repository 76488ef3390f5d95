//! Built-in PostgreSQL driver backed by `tokio-postgres`.
//!
//! Registered as `postgres` and `org.postgresql.Driver`. Each session owns a current-thread
//! tokio runtime and blocks on it for every call, so the public API stays synchronous.
//!
//! Statements use the simple query protocol: values come back as text and the whole result is
//! read before the call returns.

use crate::driver::{Driver, DriverRegistration, Session};
use crate::error::BoxError;
use crate::row::{Row, Rows};
use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tokio_postgres::{Client, Config, NoTls, SimpleQueryMessage};
use url::{Host, ParseError, Url};

const URL_PREFIX: &str = "jdbc:postgresql://";

/// The PostgreSQL driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgDriver;

static PG_DRIVER: PgDriver = PgDriver;

inventory::submit! { DriverRegistration::new("postgres", &PG_DRIVER) }
inventory::submit! { DriverRegistration::new("org.postgresql.Driver", &PG_DRIVER) }

/// A connection URL that could not be turned into connection settings.
#[derive(Debug, Error)]
pub enum PgUrlError {
    #[error("url does not start with 'jdbc:postgresql://': {0}")]
    Scheme(String),
    #[error("malformed url '{url}': {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },
    #[error("url has no host: {0}")]
    MissingHost(String),
    #[error("url has no database name: {0}")]
    MissingDatabase(String),
}

/// Build `tokio-postgres` settings from a `jdbc:postgresql://host[:port]/database` URL.
///
/// Only the address is parsed as a URL authority. Everything after the first `/` is the
/// database name, taken verbatim: it is not percent-decoded and `?` or `#` are part of the name.
pub fn parse_url(
    url: &str,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Config, PgUrlError> {
    let rest = url
        .strip_prefix(URL_PREFIX)
        .ok_or_else(|| PgUrlError::Scheme(url.to_string()))?;
    let (address, database) = rest.split_once('/').unwrap_or((rest, ""));

    let parsed = Url::parse(&format!("postgresql://{address}")).map_err(|source| {
        PgUrlError::Parse {
            url: url.to_string(),
            source,
        }
    })?;

    let host = match parsed.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        _ => return Err(PgUrlError::MissingHost(url.to_string())),
    };

    if database.is_empty() {
        return Err(PgUrlError::MissingDatabase(url.to_string()));
    }

    let mut config = Config::new();
    config.host(&host).dbname(database);
    if let Some(port) = parsed.port() {
        config.port(port);
    }
    if let Some(user) = username {
        config.user(user);
    }
    if let Some(password) = password {
        config.password(password);
    }
    Ok(config)
}

impl Driver for PgDriver {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn accepts_url(&self, url: &str) -> bool {
        url.starts_with(URL_PREFIX)
    }

    fn connect(
        &self,
        url: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Box<dyn Session>, BoxError> {
        let config = parse_url(url, username, password)?;
        Ok(Box::new(PgSession::connect(&config)?))
    }
}

/// A live PostgreSQL session.
///
/// Reach it through [`Connection::handle`](crate::Connection::handle) and
/// [`Session::as_any`] to use the underlying [`Client`] directly.
pub struct PgSession {
    client: Client,
    connection: JoinHandle<()>,
    runtime: Runtime,
}

impl PgSession {
    /// Open a session with `config`.
    pub fn connect(config: &Config) -> Result<Self, BoxError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let (client, connection) = runtime.block_on(config.connect(NoTls))?;
        let connection = runtime.spawn(async move {
            if let Err(e) = connection.await {
                tracing::warn!(
                    target: "gdbc.connect",
                    error = %e,
                    "postgres connection closed with error"
                );
            }
        });

        Ok(Self {
            client,
            connection,
            runtime,
        })
    }

    /// The underlying `tokio-postgres` client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Run a future on this session's runtime, e.g. one built from [`client`](Self::client).
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn simple_query(&self, sql: &str) -> Result<Vec<SimpleQueryMessage>, tokio_postgres::Error> {
        self.runtime.block_on(self.client.simple_query(sql))
    }
}

impl Session for PgSession {
    /// Returns the rows of the last row-returning statement in `sql`.
    fn query(&mut self, sql: &str) -> Result<Rows, BoxError> {
        let mut columns: Option<Arc<[String]>> = None;
        let mut rows = Vec::new();

        for message in self.simple_query(sql)? {
            match message {
                // A new row-returning statement starts; earlier result sets are dropped.
                SimpleQueryMessage::RowDescription(description) => {
                    columns = Some(description.iter().map(|c| c.name().to_string()).collect());
                    rows.clear();
                }
                SimpleQueryMessage::Row(row) => {
                    let columns = columns
                        .get_or_insert_with(|| {
                            row.columns().iter().map(|c| c.name().to_string()).collect()
                        })
                        .clone();
                    let values = (0..row.len())
                        .map(|i| row.get(i).map(str::to_string))
                        .collect();
                    rows.push(Row::new(columns, values));
                }
                _ => {}
            }
        }

        let columns = columns.unwrap_or_else(|| Arc::from(Vec::new()));
        Ok(Rows::new(columns, rows))
    }

    /// Returns the count reported by the last statement in `sql`.
    fn execute(&mut self, sql: &str) -> Result<u64, BoxError> {
        let affected = self
            .simple_query(sql)?
            .into_iter()
            .filter_map(|message| match message {
                SimpleQueryMessage::CommandComplete(n) => Some(n),
                _ => None,
            })
            .last()
            .unwrap_or(0);
        Ok(affected)
    }

    fn close(self: Box<Self>) -> Result<(), BoxError> {
        let PgSession {
            client,
            connection,
            runtime,
        } = *self;
        drop(client);
        runtime.block_on(connection)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::Vendor;
    use tokio_postgres::config::Host;

    #[test]
    fn test_parse_url() {
        let config = parse_url(
            "jdbc:postgresql://db.internal:6543/app",
            Some("app"),
            Some("secret"),
        )
        .unwrap();

        assert_eq!(config.get_hosts(), &[Host::Tcp("db.internal".to_string())]);
        assert_eq!(config.get_ports(), &[6543]);
        assert_eq!(config.get_dbname(), Some("app"));
        assert_eq!(config.get_user(), Some("app"));
        assert_eq!(config.get_password(), Some(&b"secret"[..]));
    }

    #[test]
    fn test_parse_url_without_port_or_credentials() {
        let config = parse_url("jdbc:postgresql://localhost/app", None, None).unwrap();
        assert_eq!(config.get_hosts(), &[Host::Tcp("localhost".to_string())]);
        assert!(config.get_ports().is_empty());
        assert_eq!(config.get_user(), None);
    }

    #[test]
    fn test_parse_url_errors() {
        assert!(matches!(
            parse_url("jdbc:oracle:thin:@//localhost:1521/ORCL", None, None),
            Err(PgUrlError::Scheme(_))
        ));
        assert!(matches!(
            parse_url("jdbc:postgresql:///", None, None),
            Err(PgUrlError::MissingHost(_))
        ));
        assert!(matches!(
            parse_url("jdbc:postgresql://localhost:5432/", None, None),
            Err(PgUrlError::MissingDatabase(_))
        ));
        assert!(matches!(
            parse_url("jdbc:postgresql://localhost:5432", None, None),
            Err(PgUrlError::MissingDatabase(_))
        ));
        assert!(matches!(
            parse_url("jdbc:postgresql://localhost:99999/app", None, None),
            Err(PgUrlError::Parse { .. })
        ));
    }

    #[test]
    fn test_database_name_is_taken_verbatim() {
        for database in ["my db", "Ünïcode", "app?x", "app#1", "100%", "a/b"] {
            let url = Vendor::PostgreSql.url("localhost:5432", database);
            let config = parse_url(&url, None, None).unwrap();
            assert_eq!(config.get_dbname(), Some(database), "url: {url}");
            assert_eq!(config.get_hosts(), &[Host::Tcp("localhost".to_string())]);
            assert_eq!(config.get_ports(), &[5432]);
        }
    }

    #[test]
    fn test_parse_ipv6_address() {
        let config = parse_url("jdbc:postgresql://[::1]:5433/app", None, None).unwrap();
        assert_eq!(config.get_hosts(), &[Host::Tcp("::1".to_string())]);
        assert_eq!(config.get_ports(), &[5433]);
    }

    #[test]
    fn test_accepts_url() {
        assert!(PgDriver.accepts_url("jdbc:postgresql://localhost:5432/app"));
        assert!(!PgDriver.accepts_url("postgresql://localhost:5432/app"));
    }
}
