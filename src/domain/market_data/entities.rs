use super::value_objects::{Direction, Price, Symbol};
use serde::{Deserialize, Serialize};

/// Number of indices quoted on the board.
pub const BOARD_SIZE: usize = 4;

/// Domain entity - one quoted index on the ticker board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerEntry {
    pub symbol: Symbol,
    pub price: Price,
    pub change: f64,
    pub change_percent: f64,
    pub direction: Direction,
}

impl TickerEntry {
    pub fn new(
        symbol: Symbol,
        price: Price,
        change: f64,
        change_percent: f64,
        direction: Direction,
    ) -> Self {
        Self {
            symbol,
            price,
            change,
            change_percent,
            direction,
        }
    }

    /// Red/green accents key off the change sign, not off `direction`.
    /// The two are drawn separately and may disagree within one tick.
    pub fn is_gaining(&self) -> bool {
        self.change >= 0.0
    }
}

/// Domain entity - the fixed board of quoted indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerBoard {
    entries: [TickerEntry; BOARD_SIZE],
}

impl TickerBoard {
    /// Opening quotes shown before the first simulated tick.
    pub fn seeded() -> Self {
        Self {
            entries: [
                TickerEntry::new(
                    Symbol::from("S&P 500"),
                    Price::from(4285.32),
                    24.18,
                    0.57,
                    Direction::Up,
                ),
                TickerEntry::new(
                    Symbol::from("NASDAQ"),
                    Price::from(13234.52),
                    -18.45,
                    -0.14,
                    Direction::Down,
                ),
                TickerEntry::new(
                    Symbol::from("DOW"),
                    Price::from(33875.23),
                    156.78,
                    0.47,
                    Direction::Up,
                ),
                TickerEntry::new(
                    Symbol::from("BITCOIN"),
                    Price::from(43250.18),
                    1205.43,
                    2.87,
                    Direction::Up,
                ),
            ],
        }
    }

    pub fn entries(&self) -> &[TickerEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [TickerEntry] {
        &mut self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_accent_follows_the_change_sign() {
        let mut entry = TickerEntry::new(
            Symbol::from("NASDAQ"),
            Price::from(100.0),
            -2.0,
            -0.1,
            Direction::Up,
        );
        assert!(!entry.is_gaining());
        assert!(entry.direction.is_up());

        entry.change = 0.0;
        assert!(entry.is_gaining(), "a flat change counts as gaining");
    }
}
