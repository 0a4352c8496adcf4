//! Data models
//!
//! Shared between employee-server and frontend (via API).
//! Employee IDs are `i64` (sequential, allocated by the server).

pub mod employee;

// Re-exports
pub use employee::*;
