//! empdb CLI - employee database HTTP API
//!
//! Entry point for the `empdb` binary. The only long-running command is
//! `serve`, which exposes the `employees` table over HTTP.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "empdb",
    author,
    version,
    about = "Employee records over HTTP, backed by MySQL",
    long_about = "Serve employee names and accept new employees over HTTP. Database \
                  settings are read from MYSQL_DATABASE_HOST, MYSQL_DATABASE_USER, \
                  MYSQL_DATABASE_PASSWORD and MYSQL_DATABASE_DB."
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
