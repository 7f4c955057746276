use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::Display as StrumDisplay;

/// Value Object - quoted price of an index
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    /// Build a price from a raw tick result. Quotes never go below zero.
    pub fn clamped(raw: f64) -> Self {
        Self(raw.max(0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - display name of a quoted index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.trim().is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(symbol))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - which way a quote last moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, Serialize, Deserialize)]
pub enum Direction {
    #[strum(serialize = "up")]
    #[serde(rename = "up")]
    Up,
    #[strum(serialize = "down")]
    #[serde(rename = "down")]
    Down,
}

impl Direction {
    pub fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_reject_blank_names() {
        assert!(Symbol::new("NASDAQ".to_string()).is_ok());
        assert!(Symbol::new("".to_string()).is_err());
        assert!(Symbol::new("   ".to_string()).is_err());
    }

    #[test]
    fn prices_clamp_at_zero() {
        assert_eq!(Price::clamped(12.5).value(), 12.5);
        assert_eq!(Price::clamped(0.0).value(), 0.0);
        assert_eq!(Price::clamped(-3.75).value(), 0.0);
    }

    #[test]
    fn directions_display_lowercase() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
        assert!(Direction::Up.is_up());
        assert!(!Direction::Down.is_up());
    }
}
