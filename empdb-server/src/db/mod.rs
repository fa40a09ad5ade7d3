//! Database layer - per-request connections and the employee store
//!
//! # Design Principles
//!
//! - No pool: each operation opens one connection and closes it afterwards
//! - One statement per operation, user input always bound as parameters
//! - Any connection that is not fully established is a connection error

pub mod connection;
pub mod employees;
pub mod error;

pub use connection::{acquire, release};
pub use employees::{EmployeeStore, MySqlEmployeeStore};
pub use error::DbError;
