//! Employee Documents

use serde::{Deserialize, Serialize};

/// Logical collections of the company database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Employees,
    Departments,
    Developers,
    Testers,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Employees,
        Collection::Departments,
        Collection::Developers,
        Collection::Testers,
    ];

    /// Table name in the store
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Employees => "employees",
            Collection::Departments => "departments",
            Collection::Developers => "developers",
            Collection::Testers => "testers",
        }
    }
}

/// Employee document; `id` is the logical primary key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
}

/// Department membership, references `Employee::id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub emp_id: i64,
}

/// Developer role row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub language: String,
    pub emp_id: i64,
}

/// Tester role row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tester {
    pub language: String,
    pub emp_id: i64,
}

/// A document to insert, tagged with the collection it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecord {
    Employee(Employee),
    Department(Department),
    Developer(Developer),
    Tester(Tester),
}

impl NewRecord {
    pub fn collection(&self) -> Collection {
        match self {
            NewRecord::Employee(_) => Collection::Employees,
            NewRecord::Department(_) => Collection::Departments,
            NewRecord::Developer(_) => Collection::Developers,
            NewRecord::Tester(_) => Collection::Testers,
        }
    }
}
