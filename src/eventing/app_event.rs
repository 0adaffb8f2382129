//! AppEvent - Application Event Enum
//!
//! All events that can be sent from the controller to the presentation
//! layer. Delivery is non-blocking: events are pushed onto an unbounded
//! crossbeam channel and drained by whatever renders the view.

use chrono::{DateTime, Local};

use crate::domain::employee::Employee;
use crate::domain::pager::Pager;

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Events for controller -> presentation communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User-facing notice (replaces blocking alert dialogs)
    Notice {
        level: NoticeLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// The visible page changed (refresh, page change, or filter change)
    ListUpdated {
        employees: Vec<Employee>,
        pager: Pager,
    },

    /// Loading indicator flipped
    LoadingChanged { loading: bool },

    /// The create/edit dialog should be dismissed
    DialogDismissed,
}

impl AppEvent {
    /// Create a notice event with the current timestamp
    pub fn notice(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self::Notice {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self::notice(NoticeLevel::Success, message)
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self::notice(NoticeLevel::Error, message)
    }
}
