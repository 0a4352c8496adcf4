//! SurrealDB-backed store
//!
//! Employees live under record key `employees:<id>`, so the store itself
//! rejects a second employee with the same id. Related rows get generated
//! keys and reference the employee through `emp_id`.

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::{EmployeeStore, RepoError, RepoResult};
use crate::db::models::{Employee, JoinedEmployeeRow, NewRecord};

const LATEST_EMPLOYEE: &str =
    "SELECT record::id(id) AS id, name FROM employees ORDER BY id DESC LIMIT 1";

const CREATE_EMPLOYEE: &str = "CREATE type::thing('employees', $id) SET name = $name";

const CREATE_RELATED: &str = "CREATE type::table($table) CONTENT $doc";

const JOINED_EMPLOYEES: &str = r#"SELECT
        record::id(id) AS id,
        name,
        (SELECT name FROM departments WHERE emp_id = record::id($parent.id)) AS department_info,
        (SELECT language FROM developers WHERE emp_id = record::id($parent.id)) AS developer_info,
        (SELECT language FROM testers WHERE emp_id = record::id($parent.id)) AS tester_info
    FROM employees"#;

#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Any>,
}

impl SurrealStore {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}

/// Map a write failure, recognising a taken record key.
///
/// Embedded and remote engines report the clash with different error types
/// but the same wording.
fn write_error(err: surrealdb::Error) -> RepoError {
    let message = err.to_string();
    if message.contains("already exists") {
        RepoError::Duplicate(message)
    } else {
        RepoError::Database(message)
    }
}

#[async_trait]
impl EmployeeStore for SurrealStore {
    async fn latest_employee(&self) -> RepoResult<Option<Employee>> {
        let mut result = self.db.query(LATEST_EMPLOYEE).await?.check()?;
        let employees: Vec<Employee> = result
            .take(0)
            .map_err(|e| RepoError::Decode(e.to_string()))?;
        Ok(employees.into_iter().next())
    }

    async fn insert(&self, record: NewRecord) -> RepoResult<()> {
        let table = record.collection().table();
        let query = match record {
            NewRecord::Employee(employee) => self
                .db
                .query(CREATE_EMPLOYEE)
                .bind(("id", employee.id))
                .bind(("name", employee.name)),
            NewRecord::Department(department) => self
                .db
                .query(CREATE_RELATED)
                .bind(("table", table))
                .bind(("doc", department)),
            NewRecord::Developer(developer) => self
                .db
                .query(CREATE_RELATED)
                .bind(("table", table))
                .bind(("doc", developer)),
            NewRecord::Tester(tester) => self
                .db
                .query(CREATE_RELATED)
                .bind(("table", table))
                .bind(("doc", tester)),
        };

        query.await?.check().map_err(write_error)?;
        Ok(())
    }

    async fn joined_employees(&self) -> RepoResult<Vec<JoinedEmployeeRow>> {
        let mut result = self.db.query(JOINED_EMPLOYEES).await?.check()?;
        let rows: Vec<JoinedEmployeeRow> = result
            .take(0)
            .map_err(|e| RepoError::Decode(e.to_string()))?;
        Ok(rows)
    }
}
