//! State - List View State Modules

pub mod list_state;
