//! FinanceFlow - investment landing page rendered with Leptos.
//!
//! The crate follows a DDD-flavored layering: `domain` holds pure state
//! and simulation logic, `application` the reactive store and feed
//! lifecycle, `infrastructure` the browser bindings, `presentation` the
//! static copy, and `app` the component tree.

use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod view_state;

/// Wire platform services and mount the page.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 FinanceFlow page booting",
    );

    leptos::mount_to_body(app::App);
}
