//! Employee insert payload and its validated form

use serde::Deserialize;
use serde_json::Value;

use super::ValidationError;

/// Maximum length for name and position (matches a VARCHAR(255) column)
pub const MAX_TEXT_LEN: usize = 255;

/// Raw `POST /add_employee` body.
///
/// Fields stay loosely typed so that a wrong type is reported as a
/// validation failure on that field rather than a generic parse error.
#[derive(Debug, Default, Deserialize)]
pub struct AddEmployeeRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub position: Option<Value>,
    #[serde(default)]
    pub salary: Option<Value>,
}

impl AddEmployeeRequest {
    /// Parse a request body, requiring a top-level JSON object.
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        if !body.is_object() {
            return Err(ValidationError::MalformedBody {
                reason: "expected a JSON object".to_owned(),
            });
        }

        serde_json::from_value(body).map_err(|e| ValidationError::MalformedBody {
            reason: e.to_string(),
        })
    }
}

/// Non-empty text column value (name or position)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField(String);

impl TextField {
    /// Validate a text value for `field`.
    ///
    /// # Rules
    /// - Must not be empty or whitespace only
    /// - Max 255 characters, counted on the stored value
    ///
    /// The value is kept exactly as submitted.
    pub fn new(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field });
        }

        if s.chars().count() > MAX_TEXT_LEN {
            return Err(ValidationError::TooLong {
                field,
                max: MAX_TEXT_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    fn from_value(field: &'static str, value: Option<Value>) -> Result<Self, ValidationError> {
        match value {
            None | Some(Value::Null) => Err(ValidationError::Missing { field }),
            Some(Value::String(s)) => Self::new(field, &s),
            Some(_) => Err(ValidationError::InvalidFormat {
                field,
                reason: "must be a string",
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TextField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Non-negative, finite salary amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Salary(f64);

impl Salary {
    const FIELD: &'static str = "salary";

    pub fn new(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                reason: "must be a finite number",
            });
        }

        if amount < 0.0 {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                reason: "must not be negative",
            });
        }

        Ok(Self(amount))
    }

    /// Accepts a JSON number or a numeric string such as `"52000.50"`.
    fn from_value(value: Option<Value>) -> Result<Self, ValidationError> {
        match value {
            None | Some(Value::Null) => Err(ValidationError::Missing { field: Self::FIELD }),
            Some(Value::Number(n)) => {
                let amount = n.as_f64().ok_or(ValidationError::InvalidFormat {
                    field: Self::FIELD,
                    reason: "must be a number",
                })?;
                Self::new(amount)
            }
            Some(Value::String(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ValidationError::Empty { field: Self::FIELD });
                }
                let amount = s.parse::<f64>().map_err(|_| ValidationError::InvalidFormat {
                    field: Self::FIELD,
                    reason: "must be a number",
                })?;
                Self::new(amount)
            }
            Some(_) => Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                reason: "must be a number",
            }),
        }
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

/// Fully validated employee ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: TextField,
    pub position: TextField,
    pub salary: Salary,
}

impl TryFrom<AddEmployeeRequest> for NewEmployee {
    type Error = ValidationError;

    fn try_from(req: AddEmployeeRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: TextField::from_value("name", req.name)?,
            position: TextField::from_value("position", req.position)?,
            salary: Salary::from_value(req.salary)?,
        })
    }
}
