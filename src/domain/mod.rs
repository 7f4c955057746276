//! Domain layer - pure business logic with no platform dependencies.

pub mod errors;
pub mod logging;
pub mod market_data;
pub mod page;
