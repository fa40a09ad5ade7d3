//! Acquire and release a single MySQL connection
//!
//! Callers pair every successful [`acquire`] with a [`release`] on all exit
//! paths, including the one where their statement failed.

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use super::DbError;
use crate::config::DatabaseConfig;

/// Build connect options, failing if any required setting is missing.
pub fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, DbError> {
    if let Some(name) = config.missing_setting() {
        return Err(DbError::NotConfigured(name));
    }

    let opts = MySqlConnectOptions::new()
        .host(config.host.as_deref().unwrap_or_default())
        .port(config.port())
        .username(config.user.as_deref().unwrap_or_default())
        .password(config.password.as_deref().unwrap_or_default())
        .database(config.database.as_deref().unwrap_or_default());

    Ok(opts)
}

/// Open a connection and confirm it is live.
///
/// A connection that opens but fails the ping is closed and reported as
/// [`DbError::Connect`], never handed to the caller.
pub async fn acquire(config: &DatabaseConfig) -> Result<MySqlConnection, DbError> {
    let opts = connect_options(config).inspect_err(|e| {
        tracing::error!(error = %e, "Could not connect to MySQL");
    })?;

    tracing::info!(
        host = ?config.host,
        user = ?config.user,
        "Attempting to connect to MySQL"
    );

    let mut conn = MySqlConnection::connect_with(&opts).await.map_err(|e| {
        tracing::error!(
            host = ?config.host,
            user = ?config.user,
            error = %e,
            "Could not connect to MySQL"
        );
        DbError::Connect(e)
    })?;

    if let Err(e) = conn.ping().await {
        tracing::error!(error = %e, "MySQL connection not established after connect");
        release(conn).await;
        return Err(DbError::Connect(e));
    }

    tracing::debug!("Connection to MySQL successful");
    Ok(conn)
}

/// Close a connection. A failed close is logged and otherwise ignored.
pub async fn release(conn: MySqlConnection) {
    match conn.close().await {
        Ok(()) => tracing::debug!("MySQL connection closed"),
        Err(e) => tracing::warn!(error = %e, "Error while closing MySQL connection"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> DatabaseConfig {
        DatabaseConfig {
            host: Some("127.0.0.1".into()),
            port: None,
            user: Some("app".into()),
            password: Some("secret".into()),
            database: Some("company".into()),
        }
    }

    #[test]
    fn options_require_every_setting() {
        let config = DatabaseConfig {
            user: None,
            ..full_config()
        };
        let err = connect_options(&config).unwrap_err();
        assert!(matches!(err, DbError::NotConfigured("MYSQL_DATABASE_USER")));
    }

    #[test]
    fn options_built_from_complete_config() {
        assert!(connect_options(&full_config()).is_ok());
    }

    #[tokio::test]
    async fn missing_config_fails_without_network() {
        let err = acquire(&DatabaseConfig::default()).await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn acquires_and_releases() {
        let config = DatabaseConfig::from_env().expect("MYSQL_DATABASE_* invalid");
        let mut conn = acquire(&config).await.expect("connect failed");

        let one: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&mut conn)
            .await
            .expect("query failed");
        assert_eq!(one, 1);

        release(conn).await;
    }
}
