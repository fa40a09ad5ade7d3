//! Route handlers organized by resource

pub mod employees;
pub mod greeting;
pub mod health;
