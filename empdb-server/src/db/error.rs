//! Database error type

/// Failure while talking to the employee database
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A required `MYSQL_DATABASE_*` setting is absent
    #[error("database is not configured: {0} is not set")]
    NotConfigured(&'static str),

    /// The server could not be reached, refused the credentials or did not
    /// answer the post-connect ping
    #[error("could not connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// The statement itself failed
    #[error("{0}")]
    Query(#[source] sqlx::Error),
}

impl DbError {
    /// True for every failure that happened before a usable connection existed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::NotConfigured(_) | Self::Connect(_))
    }
}
