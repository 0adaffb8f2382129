//! Staff Console Client Library
//!
//! This crate provides the client-side logic for the Staff Console, an
//! administrative interface for managing employee records held by a remote
//! REST collection. The presentation layer (widgets, routing) is external:
//! it drives the controller in `features` and drains the event channel
//! exposed by `eventing`.

pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod services;
pub mod state;
pub mod utils;
