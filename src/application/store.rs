//! Reactive wrapper around [`ViewState`].

use leptos::*;

use crate::domain::logging::LogComponent;
use crate::domain::market_data::{RandomSource, TickerBoard};
use crate::domain::page::{DashboardTab, SectionId, SectionSet};
use crate::log_debug;
use crate::view_state::ViewState;

/// One signal in, memoized slices out.
///
/// Components subscribe to the slices they render; mutation goes through
/// the named methods so every state change has one obvious entry point.
#[derive(Clone, Copy)]
pub struct PageStore {
    state: RwSignal<ViewState>,
    pub menu_open: Memo<bool>,
    pub active_tab: Memo<DashboardTab>,
    pub nav_solid: Memo<bool>,
    pub hero_parallax: Memo<f64>,
    pub revealed: Memo<SectionSet>,
    pub board: Memo<TickerBoard>,
}

impl PageStore {
    pub fn new() -> Self {
        let state = create_rw_signal(ViewState::new());
        Self {
            state,
            menu_open: create_memo(move |_| state.with(|vs| vs.menu_open)),
            active_tab: create_memo(move |_| state.with(|vs| vs.active_tab)),
            nav_solid: create_memo(move |_| state.with(|vs| vs.nav_solid())),
            hero_parallax: create_memo(move |_| state.with(|vs| vs.hero_parallax())),
            revealed: create_memo(move |_| state.with(|vs| vs.revealed)),
            board: create_memo(move |_| state.with(|vs| vs.board.clone())),
        }
    }

    /// Build a store and install it into the reactive context.
    pub fn provide() -> Self {
        let store = Self::new();
        provide_context(store);
        store
    }

    /// Fetch the store installed by [`PageStore::provide`].
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn toggle_menu(&self) {
        self.state.update(|vs| vs.toggle_menu());
    }

    pub fn select_tab(&self, tab: DashboardTab) {
        self.state.update(|vs| vs.select_tab(tab));
    }

    pub fn record_scroll(&self, y: f64) {
        self.state.update(|vs| vs.record_scroll(y));
    }

    pub fn reveal_section(&self, id: SectionId) {
        // Repeat sightings must not wake subscribers.
        if self.state.with_untracked(|vs| vs.is_revealed(id)) {
            return;
        }
        self.state.update(|vs| {
            if vs.reveal_section(id) {
                log_debug!(LogComponent::Application("Store"), "section '{}' revealed", id);
            }
        });
    }

    pub fn apply_market_tick(&self, rng: &mut dyn RandomSource) {
        self.state.update(|vs| vs.apply_market_tick(rng));
    }

    /// Reactive read of one section's reveal flag.
    pub fn section_revealed(&self, id: SectionId) -> bool {
        self.revealed.get().contains(id)
    }

    /// Untracked copy of the full state, for assertions and logging.
    pub fn snapshot(&self) -> ViewState {
        self.state.get_untracked()
    }
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}
