//! Database Models
//!
//! Persisted documents, one per collection, plus the weakly typed shape
//! produced by the employee join.

pub mod employee;
pub mod joined;

// Re-exports
pub use employee::{Collection, Department, Developer, Employee, NewRecord, Tester};
pub use joined::{Candidates, FieldValue, JoinArray, JoinedEmployeeRow};
