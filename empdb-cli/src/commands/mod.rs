//! Command implementations for the empdb CLI

pub mod serve;

pub use serve::run_serve;
