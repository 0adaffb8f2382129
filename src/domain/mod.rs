//! Domain - Pure Data Structures
//!
//! These types don't depend on the presentation layer and represent the
//! business domain.

pub mod config;
pub mod employee;
pub mod pager;
