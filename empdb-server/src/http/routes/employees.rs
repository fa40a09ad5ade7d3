//! Employee endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{AddEmployeeRequest, NewEmployee, ValidationError};

pub const EMPLOYEE_ADDED: &str = "Employee added successfully";

/// Confirmation body
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /read_from_database - list employee names
async fn read_from_database(State(state): State<Arc<AppState>>) -> Response {
    tracing::info!("Processing request: /read_from_database");

    match state.store.list_names().await {
        Ok(names) => state.format.render_names(names),
        Err(e) => ApiError::from(e).render(state.format),
    }
}

/// POST /add_employee - insert one employee
///
/// The body is fully validated before a connection is opened.
async fn add_employee(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::info!("Processing request: /add_employee");

    let Json(body) = payload.map_err(|e| ValidationError::MalformedBody {
        reason: e.body_text(),
    })?;
    let employee = NewEmployee::try_from(AddEmployeeRequest::from_json(body)?)?;

    state.store.add(&employee).await?;

    Ok(Json(MessageResponse {
        message: EMPLOYEE_ADDED,
    }))
}

/// Employee routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/read_from_database", get(read_from_database))
        .route("/add_employee", post(add_employee))
}
