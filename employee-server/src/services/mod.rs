//! Employee services
//!
//! - [`next_employee_id`] - sequential id allocation
//! - [`EmployeeWriter`] - validated multi-collection create flow
//! - [`EmployeeReader`] - joined listing

pub mod employee_reader;
pub mod employee_writer;
pub mod id_allocator;

pub use employee_reader::EmployeeReader;
pub use employee_writer::EmployeeWriter;
pub use id_allocator::next_employee_id;
