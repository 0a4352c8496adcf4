//! Repository Module
//!
//! Storage access for the company collections. Writers and readers only see
//! [`EmployeeStore`]; the process bootstrap decides which implementation
//! backs it.

pub mod memory;
pub mod surreal;

pub use memory::MemoryStore;
pub use surreal::SurrealStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::db::models::{Employee, JoinedEmployeeRow, NewRecord};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// The record key is already taken
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    /// Query output could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Storage capabilities needed by the employee services
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Employee with the highest `id`, if any
    async fn latest_employee(&self) -> RepoResult<Option<Employee>>;

    /// Insert one document into the collection the record belongs to.
    ///
    /// Inserting an employee whose `id` already exists fails with
    /// [`RepoError::Duplicate`].
    async fn insert(&self, record: NewRecord) -> RepoResult<()>;

    /// Every employee, outer-joined with its department, developer and
    /// tester rows. Order is stable for a fixed store state.
    async fn joined_employees(&self) -> RepoResult<Vec<JoinedEmployeeRow>>;
}
