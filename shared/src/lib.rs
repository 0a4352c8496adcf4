//! Shared types for the employee directory
//!
//! Wire types exchanged between the employee server and its HTTP clients.

pub mod models;

// Re-exports
pub use models::{CreateEmployeeRequest, CreateEmployeeResponse, EmployeeFull, Role};
pub use serde::{Deserialize, Serialize};
