use financeflow_wasm::application::{PageNotifier, PageStore};
use financeflow_wasm::domain::market_data::RandomSource;
use financeflow_wasm::domain::page::{DashboardTab, SectionId};
use leptos::*;

struct FixedRandom(f64);

impl RandomSource for FixedRandom {
    fn unit(&mut self) -> f64 {
        self.0
    }
}

#[test]
fn slices_follow_the_state() {
    let runtime = create_runtime();

    let store = PageStore::new();
    assert!(!store.menu_open.get_untracked());
    assert_eq!(store.active_tab.get_untracked(), DashboardTab::Overview);
    assert!(!store.nav_solid.get_untracked());
    assert_eq!(store.hero_parallax.get_untracked(), 0.0);

    store.toggle_menu();
    assert!(store.menu_open.get_untracked());

    store.select_tab(DashboardTab::Performance);
    assert_eq!(store.active_tab.get_untracked(), DashboardTab::Performance);

    store.record_scroll(120.0);
    assert!(store.nav_solid.get_untracked());
    assert_eq!(store.hero_parallax.get_untracked(), 60.0);

    runtime.dispose();
}

#[test]
fn reveals_are_one_shot_through_the_store() {
    let runtime = create_runtime();

    let store = PageStore::new();
    assert!(store.revealed.get_untracked().is_empty());

    store.reveal_section(SectionId::Markets);
    assert!(store.revealed.get_untracked().contains(SectionId::Markets));

    store.reveal_section(SectionId::Markets);
    assert_eq!(store.revealed.get_untracked().len(), 1);

    runtime.dispose();
}

#[test]
fn market_ticks_flow_into_the_board_slice() {
    let runtime = create_runtime();

    let store = PageStore::new();
    let opening = store.board.get_untracked();

    store.apply_market_tick(&mut FixedRandom(0.9));

    let after = store.board.get_untracked();
    assert_ne!(opening, after);
    // Symbols stay put, only the quotes move.
    assert_eq!(after.entries()[0].symbol.value(), "S&P 500");
    assert!((after.entries()[0].price.value() - 4287.32).abs() < 1e-9);

    runtime.dispose();
}

#[test]
fn notifier_events_land_in_the_named_mutators() {
    let runtime = create_runtime();

    let store = PageStore::new();
    store.scrolled(88.0);
    assert_eq!(store.snapshot().scroll_y, 88.0);

    store.section_shown(SectionId::Hero);
    assert!(store.snapshot().is_revealed(SectionId::Hero));

    runtime.dispose();
}
