//! Trailing time-window filtering over a trade tape.

use crate::domain::trade::Trade;
use chrono::{DateTime, Duration, Utc};

/// Default trailing window for the volume-weighted price.
pub const DEFAULT_WINDOW_MINUTES: i64 = 15;

pub fn default_window() -> Duration {
    Duration::minutes(DEFAULT_WINDOW_MINUTES)
}

/// Inclusive: a trade stamped exactly at `cutoff` is recent.
pub fn is_recent(trade: &Trade, cutoff: DateTime<Utc>) -> bool {
    trade.timestamp() >= cutoff
}

/// Lazily yields the trades at or after `cutoff`, in tape order. The iterator
/// is `Clone`, so it can be walked more than once.
pub fn find_recent(
    trades: &[Trade],
    cutoff: DateTime<Utc>,
) -> impl Iterator<Item = &Trade> + Clone {
    trades.iter().filter(move |t| is_recent(t, cutoff))
}
