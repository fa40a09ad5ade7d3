//! Fixed-text endpoints

use axum::{routing::get, Router};

pub const WELCOME: &str = "Welcome to the Employee Database API!";
pub const HOW_ARE_YOU: &str = "I am good, how about you?";

/// GET /
async fn welcome() -> &'static str {
    WELCOME
}

/// GET /how_are_you
async fn how_are_you() -> &'static str {
    HOW_ARE_YOU
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(welcome))
        .route("/how_are_you", get(how_are_you))
}
