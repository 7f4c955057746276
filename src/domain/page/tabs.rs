use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Value Object - panes of the portfolio dashboard
///
/// Only `Overview` ships with real content; the other panes are
/// placeholders and render an empty body.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum DashboardTab {
    #[strum(serialize = "overview")]
    #[serde(rename = "overview")]
    Overview,
    #[strum(serialize = "holdings")]
    #[serde(rename = "holdings")]
    Holdings,
    #[strum(serialize = "performance")]
    #[serde(rename = "performance")]
    Performance,
    #[strum(serialize = "transactions")]
    #[serde(rename = "transactions")]
    Transactions,
}

impl DashboardTab {
    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Holdings => "Holdings",
            Self::Performance => "Performance",
            Self::Transactions => "Transactions",
        }
    }

    pub fn has_content(self) -> bool {
        matches!(self, Self::Overview)
    }
}
