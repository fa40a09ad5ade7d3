//! HTTP server command
//!
//! Loads database settings from the environment and runs the API server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use empdb_server::{run_server, DatabaseConfig, ListFormat, MySqlEmployeeStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "EMPDB_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Body format of GET /read_from_database: text, json-array or json-object
    #[arg(long, short = 'f', env = "EMPDB_FORMAT", default_value = "text")]
    pub format: ListFormat,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Missing settings are allowed here; requests report them as 500s
    let db_config =
        DatabaseConfig::from_env().context("Invalid MYSQL_DATABASE_* environment variable")?;

    tracing::info!(
        host = ?db_config.host,
        user = ?db_config.user,
        database = ?db_config.database,
        "Configured MySQL"
    );
    if let Some(missing) = db_config.missing_setting() {
        tracing::warn!("{} is not set; database routes will fail until it is", missing);
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        format: args.format,
    };
    let store = Arc::new(MySqlEmployeeStore::new(db_config));

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn defaults() {
        let args = Harness::try_parse_from(["empdb"]).unwrap().serve;
        assert_eq!(args.bind.port(), 5000);
        assert_eq!(args.format, ListFormat::Text);
    }

    #[test]
    fn parses_format() {
        let args = Harness::try_parse_from(["empdb", "--format", "json-object"])
            .unwrap()
            .serve;
        assert_eq!(args.format, ListFormat::JsonObject);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Harness::try_parse_from(["empdb", "--format", "xml"]).is_err());
    }
}
