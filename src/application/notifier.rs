//! Sink for page events raised outside the component tree.

use crate::application::store::PageStore;
use crate::domain::page::SectionId;
use crate::infrastructure::services::MathRandom;

/// Events the browser feeds push into the page.
///
/// Feeds only ever see this trait, never the store directly, so a
/// recording fake can stand in for the whole page in tests.
pub trait PageNotifier {
    /// The ticker interval fired.
    fn market_tick(&self);
    /// The window scrolled to `y`.
    fn scrolled(&self, y: f64);
    /// A section entered the viewport.
    fn section_shown(&self, id: SectionId);
}

impl PageNotifier for PageStore {
    fn market_tick(&self) {
        self.apply_market_tick(&mut MathRandom::new());
    }

    fn scrolled(&self, y: f64) {
        self.record_scroll(y);
    }

    fn section_shown(&self, id: SectionId) {
        self.reveal_section(id);
    }
}
