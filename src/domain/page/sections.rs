use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Value Object - revealable page regions, keyed by their element ids
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum SectionId {
    #[strum(serialize = "hero")]
    #[serde(rename = "hero")]
    Hero,
    #[strum(serialize = "services-header")]
    #[serde(rename = "services-header")]
    Services,
    #[strum(serialize = "portfolio-header")]
    #[serde(rename = "portfolio-header")]
    Portfolio,
    #[strum(serialize = "markets-header")]
    #[serde(rename = "markets-header")]
    Markets,
    #[strum(serialize = "testimonials-header")]
    #[serde(rename = "testimonials-header")]
    Testimonials,
    #[strum(serialize = "cta-section")]
    #[serde(rename = "cta-section")]
    CallToAction,
}

impl SectionId {
    pub const COUNT: usize = 6;

    /// Id the section's sentinel element carries in the markup.
    pub fn dom_id(self) -> &'static str {
        self.into()
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Monotonic set of sections already seen in the viewport.
///
/// Insertions stick: once a section is in, nothing takes it out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionSet(u8);

impl SectionSet {
    pub fn empty() -> Self {
        Self(0)
    }

    /// Add a section. Returns whether it was new to the set.
    pub fn insert(&mut self, id: SectionId) -> bool {
        let fresh = !self.contains(id);
        self.0 |= id.bit();
        fresh
    }

    pub fn contains(self, id: SectionId) -> bool {
        self.0 & id.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}
