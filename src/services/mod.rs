//! Services - External Collaborators
//!
//! Seams to everything that lives outside the process. Today that is the
//! remote employee collection.

pub mod employees;

pub use employees::{EmployeeDirectory, RestDirectory};
