//! Error notifier that feeds the terminal status line.

use std::sync::{Arc, Mutex};

use crate::traits::ErrorNotifier;

/// Holds the most recent error message until the user dismisses it.
///
/// Clones share the same slot, so the UI keeps one handle while the
/// table owns another.
#[derive(Debug, Clone, Default)]
pub struct StatusLineNotifier {
    message: Arc<Mutex<Option<String>>>,
}

impl StatusLineNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        match self.message.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn dismiss(&self) {
        match self.message.lock() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

impl ErrorNotifier for StatusLineNotifier {
    fn notify(&self, message: &str) {
        match self.message.lock() {
            Ok(mut guard) => *guard = Some(message.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_then_dismiss() {
        let notifier = StatusLineNotifier::new();
        assert!(notifier.current().is_none());

        let ui_handle = notifier.clone();
        notifier.notify("Error Loading Lessons.");
        assert_eq!(ui_handle.current().as_deref(), Some("Error Loading Lessons."));

        ui_handle.dismiss();
        assert!(notifier.current().is_none());
    }
}
