//! Eventing - Controller to Presentation Channel

pub mod app_event;
