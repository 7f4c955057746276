//! Interactive state of the page, independent of any rendering concern.

use crate::domain::market_data::{RandomSource, TickerBoard, TickerSimulator};
use crate::domain::page::{DashboardTab, SectionId, SectionSet};

/// Nav switches from transparent to solid strictly past this scroll depth.
pub const NAV_SOLID_THRESHOLD_PX: f64 = 50.0;
/// Hero content drifts at half the scroll speed.
pub const HERO_PARALLAX_FACTOR: f64 = 0.5;

/// Everything the page remembers between renders.
///
/// Mutation happens only through the named methods below; the reactive
/// store wraps one value of this and derives its slices from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub menu_open: bool,
    pub active_tab: DashboardTab,
    pub scroll_y: f64,
    pub revealed: SectionSet,
    pub board: TickerBoard,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            menu_open: false,
            active_tab: DashboardTab::Overview,
            scroll_y: 0.0,
            revealed: SectionSet::empty(),
            board: TickerBoard::seeded(),
        }
    }

    /// Flip the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Switch the dashboard pane.
    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    /// Remember the latest scroll position.
    pub fn record_scroll(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Mark a section as seen. Reveals never revert; returns whether this
    /// was the first sighting.
    pub fn reveal_section(&mut self, id: SectionId) -> bool {
        self.revealed.insert(id)
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains(id)
    }

    /// One randomized movement of every quote on the board.
    pub fn apply_market_tick(&mut self, rng: &mut dyn RandomSource) {
        TickerSimulator::new().advance(&mut self.board, rng);
    }

    /// Whether the nav bar shows its solid backdrop.
    pub fn nav_solid(&self) -> bool {
        self.scroll_y > NAV_SOLID_THRESHOLD_PX
    }

    /// Vertical offset of the hero content in pixels.
    pub fn hero_parallax(&self) -> f64 {
        self.scroll_y * HERO_PARALLAX_FACTOR
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
