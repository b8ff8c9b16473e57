//! Database configuration.

use quarry_core::DialectKind;
use serde::{Deserialize, Serialize};

use crate::error::{OrmError, Result};

const DEFAULT_DRIVER: &str = "sqlite";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings.
///
/// # Example
///
/// ```rust
/// use quarry_orm::DatabaseConfig;
///
/// let config = DatabaseConfig::from_json(r#"{"url": "sqlite::memory:"}"#).unwrap();
/// assert_eq!(config.driver, "sqlite");
/// assert_eq!(config.max_connections, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Driver key (`sqlite`, `mysql`, `pgsql`, ...); selects the dialect.
    #[serde(default = "default_driver")]
    pub driver: String,
    /// Connection URL.
    pub url: String,
    /// Pool size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_driver() -> String {
    String::from(DEFAULT_DRIVER)
}

const fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl DatabaseConfig {
    /// Creates a configuration with the default pool size.
    pub fn new(driver: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// A private in-memory SQLite database on a single connection.
    pub fn sqlite_memory() -> Self {
        Self {
            driver: default_driver(),
            url: String::from("sqlite::memory:"),
            max_connections: 1,
        }
    }

    /// Sets the pool size.
    #[must_use]
    pub const fn max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }

    /// Parses a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrmError::Config`] when the JSON is malformed or `url` is
    /// missing.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| OrmError::Config(e.to_string()))
    }

    /// Reads `QUARRY_DRIVER`, `DATABASE_URL` and `QUARRY_MAX_CONNECTIONS`.
    ///
    /// # Errors
    ///
    /// Returns [`OrmError::Config`] when `DATABASE_URL` is unset or the pool
    /// size is not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = get("DATABASE_URL")
            .ok_or_else(|| OrmError::Config(String::from("DATABASE_URL is not set")))?;
        let driver = get("QUARRY_DRIVER").unwrap_or_else(default_driver);
        let max_connections = match get("QUARRY_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                OrmError::Config(format!("QUARRY_MAX_CONNECTIONS is not a number: {raw}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(Self {
            driver,
            url,
            max_connections,
        })
    }

    /// Returns the dialect selected by the driver key.
    pub fn dialect(&self) -> DialectKind {
        DialectKind::from_driver(&self.driver)
    }
}
