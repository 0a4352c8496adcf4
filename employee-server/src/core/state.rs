use std::sync::Arc;

use crate::core::Config;
use crate::db::repository::EmployeeStore;
use crate::services::{EmployeeReader, EmployeeWriter};

/// Server state - shared by every handler
///
/// Holds the configuration and the storage handle. The handle is created by
/// the process bootstrap and only read afterwards; cloning is an `Arc` bump.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | immutable configuration |
/// | store | Arc<dyn EmployeeStore> | storage access |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<dyn EmployeeStore>,
}

impl ServerState {
    pub fn new(config: Config, store: Arc<dyn EmployeeStore>) -> Self {
        Self { config, store }
    }

    /// Writer bounded by the create budget
    pub fn employee_writer(&self) -> EmployeeWriter {
        EmployeeWriter::new(self.store.clone(), self.config.create_timeout())
    }

    /// Reader bounded by the list budget
    pub fn employee_reader(&self) -> EmployeeReader {
        EmployeeReader::new(self.store.clone(), self.config.list_timeout())
    }
}
