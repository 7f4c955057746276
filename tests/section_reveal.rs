use financeflow_wasm::domain::page::{SectionId, SectionSet};
use financeflow_wasm::view_state::ViewState;
use strum::IntoEnumIterator;

#[test]
fn reveals_are_one_shot_and_monotonic() {
    let mut state = ViewState::new();
    assert!(!state.is_revealed(SectionId::Services));

    assert!(state.reveal_section(SectionId::Services));
    assert!(state.is_revealed(SectionId::Services));

    // Repeat sightings change nothing and report stale.
    assert!(!state.reveal_section(SectionId::Services));
    assert!(state.is_revealed(SectionId::Services));
}

#[test]
fn all_six_sections_fit_in_the_set() {
    let mut set = SectionSet::empty();
    assert!(set.is_empty());

    for section in SectionId::iter() {
        assert!(set.insert(section));
    }
    assert_eq!(set.len(), SectionId::COUNT);

    for section in SectionId::iter() {
        assert!(set.contains(section));
        assert!(!set.insert(section));
    }
    assert_eq!(set.len(), SectionId::COUNT);
}

#[test]
fn dom_ids_round_trip() {
    for section in SectionId::iter() {
        assert_eq!(section.dom_id().parse::<SectionId>(), Ok(section));
    }
}

#[test]
fn dom_ids_match_the_markup() {
    assert_eq!(SectionId::Hero.dom_id(), "hero");
    assert_eq!(SectionId::Services.dom_id(), "services-header");
    assert_eq!(SectionId::Portfolio.dom_id(), "portfolio-header");
    assert_eq!(SectionId::Markets.dom_id(), "markets-header");
    assert_eq!(SectionId::Testimonials.dom_id(), "testimonials-header");
    assert_eq!(SectionId::CallToAction.dom_id(), "cta-section");
}

#[test]
fn reveals_survive_unrelated_interaction() {
    let mut state = ViewState::new();
    state.reveal_section(SectionId::Markets);

    state.record_scroll(400.0);
    state.toggle_menu();
    state.reveal_section(SectionId::Hero);

    assert!(state.is_revealed(SectionId::Markets));
    assert!(state.is_revealed(SectionId::Hero));
    assert!(!state.is_revealed(SectionId::CallToAction));
    assert_eq!(state.revealed.len(), 2);
}
