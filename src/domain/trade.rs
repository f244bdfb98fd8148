//! Trade record.

use crate::domain::error::GbceError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Buy,
    Sell,
}

impl Indicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::Buy => "buy",
            Indicator::Sell => "sell",
        }
    }
}

impl FromStr for Indicator {
    type Err = GbceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(Indicator::Buy),
            "sell" => Ok(Indicator::Sell),
            other => Err(GbceError::invalid(
                "indicator",
                format!("expected buy or sell, got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single executed transaction. Fields are private so a constructed trade
/// always has a positive quantity and price.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    symbol: String,
    timestamp: DateTime<Utc>,
    quantity: u64,
    indicator: Indicator,
    price: f64,
}

impl Trade {
    pub fn new(
        symbol: impl Into<String>,
        timestamp: DateTime<Utc>,
        quantity: u64,
        indicator: Indicator,
        price: f64,
    ) -> Result<Self, GbceError> {
        let symbol = symbol.into().trim().to_uppercase();
        if symbol.is_empty() {
            return Err(GbceError::invalid("symbol", "must not be empty"));
        }
        if quantity == 0 {
            return Err(GbceError::invalid("quantity", "must be positive"));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(GbceError::invalid(
                "price",
                format!("must be a positive number, got {price}"),
            ));
        }
        Ok(Self {
            symbol,
            timestamp,
            quantity,
            indicator,
            price,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// price × quantity
    pub fn notional(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.symbol,
            self.timestamp.to_rfc3339(),
            self.price,
            self.quantity
        )
    }
}
