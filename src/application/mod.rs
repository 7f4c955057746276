//! Application layer - orchestrates domain state and live browser feeds.

pub mod lifecycle;
pub mod notifier;
pub mod session;
pub mod store;

pub use lifecycle::*;
pub use notifier::*;
pub use session::*;
pub use store::*;
