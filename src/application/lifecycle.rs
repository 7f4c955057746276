//! Cancellable handles for live browser feeds.

use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Handle to one live feed. Cancelling (or dropping) tears the feed
/// down exactly once; further cancels are no-ops.
pub struct Subscription {
    label: &'static str,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(label: &'static str, cancel: impl FnOnce() + 'static) -> Self {
        Self {
            label,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Tear the feed down.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
            log_debug!(
                LogComponent::Application("Session"),
                "feed '{}' cancelled",
                self.label
            );
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
