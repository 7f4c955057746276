//! Money and movement formatting shared by the quote views.

use crate::domain::market_data::TickerEntry;

/// "$4285.32" - two decimals, no thousands separators.
pub fn dollars(value: f64) -> String {
    format!("${:.2}", value)
}

/// "+24.18" / "-18.45" with an explicit sign.
pub fn signed(value: f64) -> String {
    format!("{:+.2}", value)
}

/// "+$24.18" / "-$18.45" - signed dollar movement.
pub fn signed_dollars(value: f64) -> String {
    if value >= 0.0 {
        format!("+${:.2}", value)
    } else {
        format!("-${:.2}", value.abs())
    }
}

/// "+0.57%" / "-0.14%" - signed percent movement.
pub fn signed_percent(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// One-line quote summary used by logs and snapshots.
pub fn quote_line(entry: &TickerEntry) -> String {
    format!(
        "{} {} {} ({}) {}",
        entry.symbol.value(),
        dollars(entry.price.value()),
        signed(entry.change),
        signed_percent(entry.change_percent),
        entry.direction
    )
}
