//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Under the text list format the list endpoint renders them as plain text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::ListFormat;
use crate::db::DbError;
use crate::models::ValidationError;

/// Body text for a database that could not be reached
pub const UNAVAILABLE_MESSAGE: &str = "Failed to connect to the database";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Invalid insert payload (400)
    Validation(ValidationError),

    /// No usable database connection (500, logged)
    Unavailable(DbError),

    /// Statement failed on an established connection (500, logged)
    Query(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) | Self::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Unavailable(_) => "database_unavailable",
            Self::Query(_) => "query_failed",
        }
    }

    /// Human-readable message shared by the JSON and plain text bodies.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Unavailable(_) => UNAVAILABLE_MESSAGE.to_owned(),
            Self::Query(e) => format!("Failed to query database: {}", e),
        }
    }

    /// Render in the body style of `format`.
    pub fn render(self, format: ListFormat) -> Response {
        if format.is_text() {
            self.log();
            (self.status(), self.message()).into_response()
        } else {
            self.into_response()
        }
    }

    fn log(&self) {
        match self {
            Self::Validation(e) => tracing::debug!("Rejected request: {}", e),
            Self::Unavailable(e) => {
                tracing::error!("Failed to establish a connection with the database: {}", e)
            }
            Self::Query(e) => tracing::error!("Database error: {}", e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let body = Json(json!({
            "error": self.kind(),
            "message": self.message()
        }));

        (self.status(), body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        if e.is_unavailable() {
            Self::Unavailable(e)
        } else {
            Self::Query(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::from(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn connection_failure_is_500() {
        let err = ApiError::from(DbError::NotConfigured("MYSQL_DATABASE_HOST"));
        assert!(matches!(err, ApiError::Unavailable(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "database_unavailable");
        assert_eq!(body["message"], UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn query_failure_renders_plain_text() {
        let err = ApiError::from(DbError::Query(sqlx::Error::RowNotFound));
        assert!(matches!(err, ApiError::Query(_)));

        let response = err.render(ListFormat::Text);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.starts_with("Failed to query database: "));
    }
}
