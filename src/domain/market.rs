//! Trade collection and aggregate market metrics.

use crate::domain::error::GbceError;
use crate::domain::format::to_currency;
use crate::domain::trade::Trade;
use crate::domain::window::{default_window, find_recent};
use chrono::{DateTime, Duration, Utc};

/// The exchange's trade tape, in the order trades were recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockMarket {
    trades: Vec<Trade>,
}

impl StockMarket {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self { trades }
    }

    pub fn record_trade(&mut self, trade: Trade) {
        tracing::debug!(
            symbol = trade.symbol(),
            quantity = trade.quantity(),
            price = trade.price(),
            "recording trade"
        );
        self.trades.push(trade);
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn trades_for<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a Trade> + Clone {
        self.trades
            .iter()
            .filter(move |t| t.symbol().eq_ignore_ascii_case(symbol))
    }

    /// Price of the latest trade in `symbol`; the later entry wins a timestamp tie.
    pub fn last_price(&self, symbol: &str) -> Option<f64> {
        self.trades_for(symbol)
            .max_by_key(|t| t.timestamp())
            .map(|t| t.price())
    }

    /// Volume-weighted price over the default 15 minute window ending at `now`.
    pub fn volume_weighted_price(&self, now: DateTime<Utc>) -> Result<String, GbceError> {
        self.volume_weighted_price_over(now, default_window())
    }

    pub fn volume_weighted_price_over(
        &self,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<String, GbceError> {
        self.volume_weighted_price_value(now, window, None)
            .map(to_currency)
    }

    /// Volume-weighted price of a single stock over the default window.
    pub fn volume_weighted_price_for(
        &self,
        symbol: &str,
        now: DateTime<Utc>,
    ) -> Result<String, GbceError> {
        self.volume_weighted_price_value(now, default_window(), Some(symbol))
            .map(to_currency)
    }

    /// Σ(price × quantity) / Σ quantity over trades at or after `now - window`,
    /// optionally restricted to one symbol.
    pub fn volume_weighted_price_value(
        &self,
        now: DateTime<Utc>,
        window: Duration,
        symbol: Option<&str>,
    ) -> Result<f64, GbceError> {
        let cutoff = now.checked_sub_signed(window).ok_or_else(|| {
            GbceError::invalid("window", format!("{window} before {now} is out of range"))
        })?;
        let mut recent = find_recent(&self.trades, cutoff)
            .filter(|t| symbol.is_none_or(|s| t.symbol().eq_ignore_ascii_case(s)));

        let (traded_value, volume) =
            recent.try_fold((0.0_f64, 0_u64), |(value, qty), t| {
                let qty = qty
                    .checked_add(t.quantity())
                    .ok_or_else(|| GbceError::invalid("quantity", "total volume overflows"))?;
                Ok::<_, GbceError>((value + t.notional(), qty))
            })?;

        if volume == 0 {
            return Err(GbceError::NoRecentTrades { cutoff });
        }

        let vwap = traded_value / volume as f64;
        tracing::debug!(cutoff = %cutoff.to_rfc3339(), volume, vwap, "volume weighted price");
        Ok(vwap)
    }

    /// GBCE all-share index: the product of every trade price divided by the
    /// number of trades. This is not the n-th root of the product; see
    /// DESIGN.md before changing it.
    pub fn gbce_index(&self) -> Result<f64, GbceError> {
        if self.trades.is_empty() {
            return Err(GbceError::NoTrades);
        }
        let product: f64 = self.trades.iter().map(Trade::price).product();
        Ok(product / self.trades.len() as f64)
    }
}

impl From<Vec<Trade>> for StockMarket {
    fn from(trades: Vec<Trade>) -> Self {
        Self::new(trades)
    }
}
