//! Infrastructure layer - browser APIs behind domain-facing seams.

pub mod browser;
pub mod services;

pub use browser::*;
pub use services::*;
