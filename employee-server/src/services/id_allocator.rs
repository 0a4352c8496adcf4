//! Employee ID allocation
//!
//! The next id is one past the current maximum, or 1 on an empty store.
//! Reading the maximum and inserting the new employee are separate steps;
//! the employee key is unique, so a concurrent writer that wins the race
//! makes the loser's insert fail with a duplicate and the loser reallocates.

use crate::db::repository::{EmployeeStore, RepoError, RepoResult};

pub async fn next_employee_id(store: &dyn EmployeeStore) -> RepoResult<i64> {
    match store.latest_employee().await? {
        None => Ok(1),
        Some(employee) => employee.id.checked_add(1).ok_or_else(|| {
            RepoError::Database(format!("employee id space exhausted at {}", employee.id))
        }),
    }
}
