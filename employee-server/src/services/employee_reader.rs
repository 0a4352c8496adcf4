//! Employee listing
//!
//! Projects the joined rows into flat [`EmployeeFull`] records, one per
//! employee, in join order. Any storage failure aborts the whole listing.

use std::sync::Arc;
use std::time::Duration;

use shared::EmployeeFull;

use crate::db::models::JoinedEmployeeRow;
use crate::db::repository::{EmployeeStore, RepoError};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct EmployeeReader {
    store: Arc<dyn EmployeeStore>,
    timeout: Duration,
}

impl EmployeeReader {
    pub fn new(store: Arc<dyn EmployeeStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn list(&self) -> AppResult<Vec<EmployeeFull>> {
        let rows = tokio::time::timeout(self.timeout, self.store.joined_employees())
            .await
            .map_err(|_| AppError::timeout("list employees"))?
            .map_err(|e| match e {
                RepoError::Decode(_) => AppError::storage("cursor read error", e),
                _ => AppError::storage("aggregation error", e),
            })?;

        Ok(rows.into_iter().map(JoinedEmployeeRow::into_full).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Collection, Department, Developer, Employee, NewRecord, Tester};
    use crate::db::repository::{MemoryStore, RepoResult};
    use async_trait::async_trait;

    fn reader(store: Arc<MemoryStore>) -> EmployeeReader {
        EmployeeReader::new(store, Duration::from_secs(10))
    }

    async fn seed(store: &MemoryStore, records: Vec<NewRecord>) {
        for record in records {
            store.insert(record).await.unwrap();
        }
    }

    fn employee(id: i64, name: &str) -> NewRecord {
        NewRecord::Employee(Employee {
            id,
            name: name.to_string(),
        })
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = Arc::new(MemoryStore::new());
        assert!(reader(store).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_projection_and_outer_join() {
        let store = Arc::new(MemoryStore::new());
        seed(
            &store,
            vec![
                employee(1, "Alice"),
                NewRecord::Department(Department {
                    name: "Engineering".to_string(),
                    emp_id: 1,
                }),
                NewRecord::Developer(Developer {
                    language: "Go".to_string(),
                    emp_id: 1,
                }),
                employee(2, "Bob"),
                NewRecord::Tester(Tester {
                    language: "Selenium".to_string(),
                    emp_id: 2,
                }),
                employee(3, "Carol"),
            ],
        )
        .await;

        let listed = reader(store).list().await.unwrap();
        assert_eq!(
            listed,
            vec![
                EmployeeFull {
                    id: 1,
                    name: "Alice".to_string(),
                    department: "Engineering".to_string(),
                    language: "Go".to_string(),
                },
                EmployeeFull {
                    id: 2,
                    name: "Bob".to_string(),
                    department: String::new(),
                    language: "Selenium".to_string(),
                },
                EmployeeFull {
                    id: 3,
                    name: "Carol".to_string(),
                    department: String::new(),
                    language: String::new(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_tester_language_not_shadowed_by_empty_developer_row() {
        let store = Arc::new(MemoryStore::new());
        seed(
            &store,
            vec![
                employee(1, "Dana"),
                NewRecord::Developer(Developer {
                    language: String::new(),
                    emp_id: 1,
                }),
                NewRecord::Tester(Tester {
                    language: "Cypress".to_string(),
                    emp_id: 1,
                }),
            ],
        )
        .await;
        let listed = reader(store).list().await.unwrap();
        assert_eq!(listed[0].language, "Cypress");
    }

    #[tokio::test]
    async fn test_query_failure_aborts_listing() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, vec![employee(1, "Alice")]).await;
        store.fail_on(Collection::Developers);
        let err = reader(store).list().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Storage { context: "aggregation error", .. }
        ));
    }

    struct UndecodableStore;

    #[async_trait]
    impl EmployeeStore for UndecodableStore {
        async fn latest_employee(&self) -> RepoResult<Option<Employee>> {
            Ok(None)
        }

        async fn insert(&self, _record: NewRecord) -> RepoResult<()> {
            Ok(())
        }

        async fn joined_employees(&self) -> RepoResult<Vec<JoinedEmployeeRow>> {
            Err(RepoError::Decode("expected a sequence".to_string()))
        }
    }

    #[tokio::test]
    async fn test_decode_failure_reported_as_cursor_error() {
        let reader = EmployeeReader::new(Arc::new(UndecodableStore), Duration::from_secs(1));
        let err = reader.list().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Storage { context: "cursor read error", .. }
        ));
    }

    #[tokio::test]
    async fn test_timeout_aborts_listing() {
        let store = Arc::new(MemoryStore::new());
        store.set_latency(Some(Duration::from_millis(200)));
        let reader = EmployeeReader::new(store, Duration::from_millis(20));
        let err = reader.list().await.unwrap_err();
        assert!(matches!(err, AppError::Timeout { .. }));
    }
}
