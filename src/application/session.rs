//! Lifetime of the live page: every feed starts together and stops together.

use crate::application::lifecycle::Subscription;
use crate::application::notifier::PageNotifier;
use crate::domain::errors::DomResult;
use crate::domain::logging::LogComponent;
use crate::infrastructure::browser::{scroll_listener, section_observer, ticker_interval};
use crate::log_info;

/// Quote board refresh cadence.
pub const TICK_INTERVAL_MS: u32 = 4_000;

/// Bundle of the live feeds behind the page: ticker interval, scroll
/// listener and section observer.
pub struct LiveSession {
    feeds: Vec<Subscription>,
}

impl LiveSession {
    /// Wire every browser feed to `notifier`.
    ///
    /// Feeds already armed are torn down again if a later one fails, so
    /// an error never leaks a running interval or listener.
    pub fn start<N>(notifier: N) -> DomResult<Self>
    where
        N: PageNotifier + Clone + 'static,
    {
        let feeds = vec![
            ticker_interval(notifier.clone(), TICK_INTERVAL_MS),
            scroll_listener(notifier.clone())?,
            section_observer(notifier)?,
        ];
        log_info!(
            LogComponent::Application("Session"),
            "live session started with {} feeds",
            feeds.len()
        );
        Ok(Self { feeds })
    }

    /// Assemble a session from already-built feeds.
    pub fn from_parts(feeds: Vec<Subscription>) -> Self {
        Self { feeds }
    }

    pub fn feed_count(&self) -> usize {
        self.feeds.len()
    }

    pub fn active_feeds(&self) -> usize {
        self.feeds.iter().filter(|feed| feed.is_active()).count()
    }

    /// Cancel every feed. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.active_feeds() == 0 {
            return;
        }
        for feed in &mut self.feeds {
            feed.cancel();
        }
        log_info!(LogComponent::Application("Session"), "live session shut down");
    }
}

impl Drop for LiveSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
