//! Validation error types

use std::fmt;

/// Validation error for incoming employee data
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is absent from the request body
    Missing { field: &'static str },

    /// Field is present but empty
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value has the wrong type or shape
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body is not a JSON object
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::MalformedBody { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
