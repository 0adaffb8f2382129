//! Employees Feature
//!
//! The employee list page: controller plus its outcome types.

pub mod controller;

pub use controller::{EmployeeListController, SaveAction, SearchOutcome};
