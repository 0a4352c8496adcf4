//! In-process store
//!
//! Same observable semantics as the SurrealDB store: employee ids are unique
//! keys, the join yields one row per employee in ascending id order, and
//! related rows are matched on `emp_id`. Faults and latency can be injected
//! to exercise the failure paths of the services.

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;

use super::{EmployeeStore, RepoError, RepoResult};
use crate::db::models::{
    Collection, Department, Developer, Employee, JoinedEmployeeRow, NewRecord, Tester,
};

#[derive(Debug, Default)]
struct Tables {
    employees: BTreeMap<i64, Employee>,
    departments: Vec<Department>,
    developers: Vec<Developer>,
    testers: Vec<Tester>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    faults: Mutex<HashSet<Collection>>,
    latency: Mutex<Option<Duration>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation touching `collection` fail
    pub fn fail_on(&self, collection: Collection) {
        self.faults.lock().insert(collection);
    }

    pub fn clear_faults(&self) {
        self.faults.lock().clear();
    }

    /// Delay every operation by `latency`
    pub fn set_latency(&self, latency: Option<Duration>) {
        *self.latency.lock() = latency;
    }

    /// Number of documents in `collection`
    pub fn count(&self, collection: Collection) -> usize {
        let tables = self.tables.lock();
        match collection {
            Collection::Employees => tables.employees.len(),
            Collection::Departments => tables.departments.len(),
            Collection::Developers => tables.developers.len(),
            Collection::Testers => tables.testers.len(),
        }
    }

    /// Total number of documents across all collections
    pub fn total(&self) -> usize {
        Collection::ALL.iter().map(|c| self.count(*c)).sum()
    }

    async fn enter(&self, collections: &[Collection]) -> RepoResult<()> {
        let latency = *self.latency.lock();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let faults = self.faults.lock();
        if let Some(collection) = collections.iter().find(|c| faults.contains(*c)) {
            return Err(RepoError::Database(format!(
                "injected fault on {}",
                collection.table()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn latest_employee(&self) -> RepoResult<Option<Employee>> {
        self.enter(&[Collection::Employees]).await?;
        let tables = self.tables.lock();
        Ok(tables.employees.values().next_back().cloned())
    }

    async fn insert(&self, record: NewRecord) -> RepoResult<()> {
        self.enter(&[record.collection()]).await?;
        let mut tables = self.tables.lock();
        match record {
            NewRecord::Employee(employee) => {
                if tables.employees.contains_key(&employee.id) {
                    return Err(RepoError::Duplicate(format!(
                        "employee {} already exists",
                        employee.id
                    )));
                }
                tables.employees.insert(employee.id, employee);
            }
            NewRecord::Department(department) => tables.departments.push(department),
            NewRecord::Developer(developer) => tables.developers.push(developer),
            NewRecord::Tester(tester) => tables.testers.push(tester),
        }
        Ok(())
    }

    async fn joined_employees(&self) -> RepoResult<Vec<JoinedEmployeeRow>> {
        self.enter(&Collection::ALL).await?;
        let tables = self.tables.lock();

        tables
            .employees
            .values()
            .map(|employee| {
                let departments: Vec<_> = tables
                    .departments
                    .iter()
                    .filter(|d| d.emp_id == employee.id)
                    .map(|d| json!({ "name": d.name }))
                    .collect();
                let developers: Vec<_> = tables
                    .developers
                    .iter()
                    .filter(|d| d.emp_id == employee.id)
                    .map(|d| json!({ "language": d.language }))
                    .collect();
                let testers: Vec<_> = tables
                    .testers
                    .iter()
                    .filter(|t| t.emp_id == employee.id)
                    .map(|t| json!({ "language": t.language }))
                    .collect();

                let row = json!({
                    "id": employee.id,
                    "name": employee.name,
                    "department_info": departments,
                    "developer_info": developers,
                    "tester_info": testers,
                });
                serde_json::from_value(row).map_err(|e| RepoError::Decode(e.to_string()))
            })
            .collect()
    }
}
