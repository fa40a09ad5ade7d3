//! Database settings sourced from `MYSQL_DATABASE_*` environment variables
//!
//! Every setting is optional at load time. A missing value only surfaces
//! when a request tries to connect, so the server always starts.

use std::fmt;

use serde::Deserialize;

/// Environment prefix shared by all database settings.
pub const ENV_PREFIX: &str = "MYSQL_DATABASE_";

/// Default MySQL port when `MYSQL_DATABASE_PORT` is unset.
pub const DEFAULT_PORT: u16 = 3306;

/// Connection settings for the employee database.
#[derive(Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Read from `MYSQL_DATABASE_DB`
    #[serde(rename = "db")]
    pub database: Option<String>,
}

impl DatabaseConfig {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// Fails only when a variable is present but malformed, e.g. a
    /// non-numeric `MYSQL_DATABASE_PORT`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env::<Self>()
    }

    /// Load settings from an explicit set of `(key, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter::<_, Self>(vars)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Name of the first required setting that is missing.
    ///
    /// Host, user and database must also be non-blank. An empty password is
    /// a valid setting for accounts without one.
    pub fn missing_setting(&self) -> Option<&'static str> {
        let blank = |value: &Option<String>| value.as_deref().map_or(true, str::is_empty);

        if blank(&self.host) {
            return Some("MYSQL_DATABASE_HOST");
        }
        if blank(&self.user) {
            return Some("MYSQL_DATABASE_USER");
        }
        if self.password.is_none() {
            return Some("MYSQL_DATABASE_PASSWORD");
        }
        if blank(&self.database) {
            return Some("MYSQL_DATABASE_DB");
        }
        None
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port())
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .finish()
    }
}
