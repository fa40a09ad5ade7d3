//! empdb-server: HTTP API over an `employees` table
//!
//! Exposes employee names for reading and an insert endpoint. Every
//! database-touching request opens its own MySQL connection and closes it
//! before responding; nothing is pooled or shared between requests.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DatabaseConfig;
pub use db::{DbError, EmployeeStore, MySqlEmployeeStore};
pub use http::{build_router, run_server, ApiError, AppState, ListFormat, ServerConfig};
pub use models::{NewEmployee, ValidationError};
