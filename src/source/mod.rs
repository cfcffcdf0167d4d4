//! Record source collaborators.
//!
//! The engine does not talk to the workforce-management API itself. It consumes
//! two narrow interfaces instead: a paginated [`PageSource`] for shift records
//! and an [`EmployeeLookup`] for employee details. In-memory implementations
//! of both are provided.

mod employee_lookup;
mod pagination;

pub use employee_lookup::{EmployeeDirectory, EmployeeLookup};
pub use pagination::{Page, PageSource, VecPageSource, fetch_all};
