//! Body shapes for the employee list

use std::fmt;
use std::str::FromStr;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Indicator returned when the table has no named rows
pub const NO_EMPLOYEES: &str = "No employees found";

/// How `GET /read_from_database` renders names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    /// `text/plain`, names joined with commas
    #[default]
    Text,
    /// JSON array of names
    JsonArray,
    /// `{"employees": [...]}`, or `{"message": ...}` when empty
    JsonObject,
}

impl ListFormat {
    pub const ALL: [ListFormat; 3] = [Self::Text, Self::JsonArray, Self::JsonObject];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::JsonArray => "json-array",
            Self::JsonObject => "json-object",
        }
    }

    pub fn is_text(self) -> bool {
        self == Self::Text
    }

    /// Render a successful list result.
    pub fn render_names(self, names: Vec<String>) -> Response {
        match self {
            Self::Text if names.is_empty() => NO_EMPLOYEES.into_response(),
            Self::Text => names.join(",").into_response(),
            Self::JsonArray => Json(names).into_response(),
            Self::JsonObject if names.is_empty() => {
                Json(json!({ "message": NO_EMPLOYEES })).into_response()
            }
            Self::JsonObject => Json(json!({ "employees": names })).into_response(),
        }
    }
}

impl fmt::Display for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised format name
#[derive(Debug, thiserror::Error)]
#[error("unknown list format '{0}' (expected text, json-array or json-object)")]
pub struct UnknownFormat(String);

impl FromStr for ListFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}
