//! Employee create flow
//!
//! Inserts the employee, its department, and its role row, in that order.
//! The inserts are independent writes: a failure stops the flow and leaves
//! earlier inserts in place.

use std::sync::Arc;
use std::time::Duration;

use shared::{CreateEmployeeRequest, Role};
use tracing::{debug, info, warn};

use crate::db::models::{Department, Developer, Employee, NewRecord, Tester};
use crate::db::repository::{EmployeeStore, RepoError};
use crate::services::next_employee_id;
use crate::utils::validation::validate_required;
use crate::utils::{AppError, AppResult};

/// Attempts at allocating a free employee id before giving up
pub const MAX_ID_ATTEMPTS: u32 = 3;

#[derive(Clone)]
pub struct EmployeeWriter {
    store: Arc<dyn EmployeeStore>,
    timeout: Duration,
}

impl EmployeeWriter {
    pub fn new(store: Arc<dyn EmployeeStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Validate and store a new employee, returning its id
    pub async fn create(&self, req: CreateEmployeeRequest) -> AppResult<i64> {
        validate_required(&[
            ("name", req.name.as_str()),
            ("department", req.department.as_str()),
            ("role", req.role.as_str()),
        ])?;

        tokio::time::timeout(self.timeout, self.write(req))
            .await
            .map_err(|_| AppError::timeout("create employee"))?
    }

    async fn write(&self, req: CreateEmployeeRequest) -> AppResult<i64> {
        let id = self.insert_employee(&req.name).await?;

        self.store
            .insert(NewRecord::Department(Department {
                name: req.department,
                emp_id: id,
            }))
            .await
            .map_err(|e| AppError::storage("error inserting department", e))?;

        match Role::parse(&req.role) {
            Some(Role::Developer) => self
                .store
                .insert(NewRecord::Developer(Developer {
                    language: req.language,
                    emp_id: id,
                }))
                .await
                .map_err(|e| AppError::storage("error inserting developer", e))?,
            Some(Role::Tester) => self
                .store
                .insert(NewRecord::Tester(Tester {
                    language: req.language,
                    emp_id: id,
                }))
                .await
                .map_err(|e| AppError::storage("error inserting tester", e))?,
            None => debug!(id, role = %req.role, "Unrecognized role, no role row written"),
        }

        info!(id, role = %req.role, "Employee created");
        Ok(id)
    }

    async fn insert_employee(&self, name: &str) -> AppResult<i64> {
        let mut attempt = 1;
        loop {
            let id = next_employee_id(self.store.as_ref())
                .await
                .map_err(|e| AppError::storage("error generating emp id", e))?;

            let employee = Employee {
                id,
                name: name.to_string(),
            };
            match self.store.insert(NewRecord::Employee(employee)).await {
                Ok(()) => return Ok(id),
                Err(RepoError::Duplicate(detail)) if attempt < MAX_ID_ATTEMPTS => {
                    warn!(id, attempt, %detail, "Employee id taken concurrently, reallocating");
                    attempt += 1;
                }
                Err(e) => return Err(AppError::storage("error inserting employee", e)),
            }
        }
    }
}
