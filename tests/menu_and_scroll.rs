use financeflow_wasm::view_state::{HERO_PARALLAX_FACTOR, NAV_SOLID_THRESHOLD_PX, ViewState};
use quickcheck_macros::quickcheck;

#[test]
fn menu_round_trips() {
    let mut state = ViewState::new();
    assert!(!state.menu_open);

    state.toggle_menu();
    assert!(state.menu_open);

    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn nav_solidifies_strictly_past_the_threshold() {
    let mut state = ViewState::new();
    assert!(!state.nav_solid());

    state.record_scroll(NAV_SOLID_THRESHOLD_PX);
    assert!(!state.nav_solid(), "exactly at the threshold stays transparent");

    state.record_scroll(NAV_SOLID_THRESHOLD_PX + 0.1);
    assert!(state.nav_solid());

    state.record_scroll(12.0);
    assert!(!state.nav_solid(), "scrolling back lifts the backdrop again");
}

#[test]
fn hero_drifts_at_half_scroll_speed() {
    let mut state = ViewState::new();
    assert_eq!(state.hero_parallax(), 0.0);

    state.record_scroll(280.0);
    assert_eq!(state.hero_parallax(), 140.0);
}

#[quickcheck]
fn parallax_is_always_half_the_scroll(y: f64) -> bool {
    if !y.is_finite() {
        return true;
    }
    let mut state = ViewState::new();
    state.record_scroll(y);
    state.hero_parallax() == y * HERO_PARALLAX_FACTOR
}

#[quickcheck]
fn double_toggle_is_identity(times: u8) -> bool {
    let mut state = ViewState::new();
    for _ in 0..times {
        state.toggle_menu();
        state.toggle_menu();
    }
    !state.menu_open
}
