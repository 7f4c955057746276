//! Presentation layer - static copy and display formatting.

pub mod content;
pub mod format;
