//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - Configurable list body format
//! - JSON error responses (plain text under the text format)

pub mod error;
pub mod format;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use format::ListFormat;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
