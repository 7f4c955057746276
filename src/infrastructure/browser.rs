//! Browser event sources feeding the page: interval ticks, scroll
//! positions and section visibility.

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::application::lifecycle::Subscription;
use crate::application::notifier::PageNotifier;
use crate::domain::errors::{AppError, DomResult, ObserverResult};
use crate::domain::logging::LogComponent;
use crate::domain::page::SectionId;
use crate::{log_debug, log_warn};

/// Share of a section that must enter the viewport before it counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.1;

fn page_window() -> DomResult<Window> {
    web_sys::window().ok_or_else(|| AppError::DomError("window is not available".to_string()))
}

fn page_document() -> DomResult<Document> {
    page_window()?
        .document()
        .ok_or_else(|| AppError::DomError("document is not available".to_string()))
}

/// Arm the periodic quote refresh.
pub fn ticker_interval<N>(notifier: N, period_ms: u32) -> Subscription
where
    N: PageNotifier + 'static,
{
    let interval = Interval::new(period_ms, move || notifier.market_tick());
    log_debug!(
        LogComponent::Infrastructure("Browser"),
        "ticker interval armed at {} ms",
        period_ms
    );
    Subscription::new("ticker-interval", move || {
        interval.cancel();
    })
}

/// Forward window scroll positions to the notifier.
pub fn scroll_listener<N>(notifier: N) -> DomResult<Subscription>
where
    N: PageNotifier + 'static,
{
    let window = page_window()?;
    let reader = window.clone();
    let listener = EventListener::new(&window, "scroll", move |_event| {
        notifier.scrolled(reader.scroll_y().unwrap_or(0.0));
    });
    Ok(Subscription::new("scroll-listener", move || drop(listener)))
}

/// Watch every section sentinel and report first viewport entries.
///
/// Sections missing from the markup are skipped with a warning; they
/// simply never reveal.
pub fn section_observer<N>(notifier: N) -> ObserverResult<Subscription>
where
    N: PageNotifier + 'static,
{
    let document = page_document()?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(section) = entry.target().id().parse::<SectionId>() {
                    notifier.section_shown(section);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| AppError::ObserverError(format!("{:?}", err)))?;

    for section in SectionId::iter() {
        match document.get_element_by_id(section.dom_id()) {
            Some(element) => observer.observe(&element),
            None => log_warn!(
                LogComponent::Infrastructure("Browser"),
                "section element '{}' is missing and will never reveal",
                section.dom_id()
            ),
        }
    }

    Ok(Subscription::new("section-observer", move || {
        observer.disconnect();
        drop(callback);
    }))
}
