//! Page interaction aggregate - dashboard tabs and revealable sections.

pub mod sections;
pub mod tabs;

pub use sections::*;
pub use tabs::*;
