#![cfg(feature = "browser-tests")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use financeflow_wasm::application::PageNotifier;
use financeflow_wasm::domain::page::SectionId;
use financeflow_wasm::infrastructure::{scroll_listener, section_observer, ticker_interval};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone, Default)]
struct RecordingNotifier {
    ticks: Rc<RefCell<u32>>,
    scrolls: Rc<RefCell<Vec<f64>>>,
    sections: Rc<RefCell<Vec<SectionId>>>,
}

impl PageNotifier for RecordingNotifier {
    fn market_tick(&self) {
        *self.ticks.borrow_mut() += 1;
    }

    fn scrolled(&self, y: f64) {
        self.scrolls.borrow_mut().push(y);
    }

    fn section_shown(&self, id: SectionId) {
        self.sections.borrow_mut().push(id);
    }
}

#[wasm_bindgen_test]
async fn interval_stops_after_cancel() {
    let notifier = RecordingNotifier::default();
    let mut feed = ticker_interval(notifier.clone(), 10);

    gloo_timers::future::sleep(Duration::from_millis(55)).await;
    let seen = *notifier.ticks.borrow();
    assert!(seen >= 2, "expected at least two ticks, saw {}", seen);

    feed.cancel();
    gloo_timers::future::sleep(Duration::from_millis(50)).await;
    assert_eq!(*notifier.ticks.borrow(), seen);
}

#[wasm_bindgen_test]
fn scroll_listener_attaches_and_detaches() {
    let notifier = RecordingNotifier::default();
    let mut feed = scroll_listener(notifier.clone()).unwrap();

    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("scroll").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(notifier.scrolls.borrow().len(), 1);

    feed.cancel();
    let event = web_sys::Event::new("scroll").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(notifier.scrolls.borrow().len(), 1);
}

#[wasm_bindgen_test]
fn observer_setup_tolerates_missing_sections() {
    // The harness page carries none of the section sentinels; setup must
    // still succeed and the feed must stay cancellable.
    let notifier = RecordingNotifier::default();
    let mut feed = section_observer(notifier.clone()).unwrap();
    assert!(feed.is_active());

    feed.cancel();
    assert!(!feed.is_active());
    assert!(notifier.sections.borrow().is_empty());
}
