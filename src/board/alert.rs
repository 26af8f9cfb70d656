//! User-facing alert port.

use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Message shown when the input form rejects a submission.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input! Please try again!";

/// Blocking, user-facing notification.
#[cfg_attr(test, mockall::automock)]
pub trait UserAlert: Send + Sync {
    /// Shows `message` to the user.
    fn alert(&self, message: &str);
}

/// Alert that only writes a warning to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlert;

impl UserAlert for LogAlert {
    fn alert(&self, message: &str) {
        warn!(message, "user alert");
    }
}

/// Alert that keeps every message for later inspection.
#[derive(Debug, Default)]
pub struct RecordingAlert {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlert {
    /// Creates an alert with no recorded messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl UserAlert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}
