//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee role
///
/// Decides which collection holds the employee's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Developer,
    Tester,
}

impl Role {
    /// Parse a role name. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "developer" => Some(Role::Developer),
            "tester" => Some(Role::Tester),
            _ => None,
        }
    }
}

/// Create employee payload
///
/// Absent fields decode as empty strings so that validation, not decoding,
/// decides what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub language: String,
    /// "developer" or "tester"
    #[serde(default)]
    pub role: String,
}

/// Create employee response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeResponse {
    pub message: String,
    pub id: i64,
}

impl CreateEmployeeResponse {
    pub fn inserted(id: i64) -> Self {
        Self {
            message: "inserted".to_string(),
            id,
        }
    }
}

/// Employee joined with its department and role language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFull {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub language: String,
}
