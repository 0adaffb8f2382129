//! Features - Page Controllers

pub mod employees;
