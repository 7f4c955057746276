use super::entities::TickerBoard;
use super::value_objects::{Direction, Price};

/// Full width of the uniform price step per tick.
pub const PRICE_SPAN: f64 = 5.0;
/// Full width of the uniform redraw of the absolute change.
pub const CHANGE_SPAN: f64 = 30.0;
/// Full width of the uniform redraw of the percent change.
pub const CHANGE_PERCENT_SPAN: f64 = 1.5;

/// Uniform random source over [0, 1).
///
/// The browser runtime backs this with `Math.random()`; tests feed
/// scripted tapes through it to make ticks deterministic.
pub trait RandomSource {
    fn unit(&mut self) -> f64;

    /// Uniform draw over (-span/2, +span/2).
    fn centered(&mut self, span: f64) -> f64 {
        (self.unit() - 0.5) * span
    }
}

/// Domain service - randomized quote movement
pub struct TickerSimulator;

impl TickerSimulator {
    pub fn new() -> Self {
        Self
    }

    /// Advance every quote one tick, in board order.
    ///
    /// Per entry the draws happen in a fixed order: price step, change,
    /// percent change, direction. Direction flips on its own draw and is
    /// independent of the change sign.
    pub fn advance(&self, board: &mut TickerBoard, rng: &mut dyn RandomSource) {
        for entry in board.entries_mut() {
            entry.price = Price::clamped(entry.price.value() + rng.centered(PRICE_SPAN));
            entry.change = rng.centered(CHANGE_SPAN);
            entry.change_percent = rng.centered(CHANGE_PERCENT_SPAN);
            entry.direction = if rng.unit() > 0.5 {
                Direction::Up
            } else {
                Direction::Down
            };
        }
    }
}

impl Default for TickerSimulator {
    fn default() -> Self {
        Self::new()
    }
}
