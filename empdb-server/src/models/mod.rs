//! Domain models with validation at construction
//!
//! Request bodies are validated into these types before any database work.
//! Invalid input returns ValidationError, not panic.

pub mod employee;
pub mod validation;

pub use employee::{AddEmployeeRequest, NewEmployee, Salary, TextField};
pub use validation::ValidationError;
