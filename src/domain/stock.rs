//! Stock reference data and per-stock metrics.

use crate::domain::error::GbceError;
use crate::domain::format::to_percent;
use std::fmt;
use std::str::FromStr;

/// Type tag as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockType {
    Common,
    Preferred,
}

impl FromStr for StockType {
    type Err = GbceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "common" => Ok(StockType::Common),
            "preferred" => Ok(StockType::Preferred),
            _ => Err(GbceError::UnsupportedStockType(s.trim().to_string())),
        }
    }
}

impl fmt::Display for StockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockType::Common => f.write_str("Common"),
            StockType::Preferred => f.write_str("Preferred"),
        }
    }
}

/// Preferred stock carries its fixed dividend; common stock has none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StockKind {
    Common,
    Preferred { fixed_dividend: f64 },
}

impl StockKind {
    pub fn stock_type(&self) -> StockType {
        match self {
            StockKind::Common => StockType::Common,
            StockKind::Preferred { .. } => StockType::Preferred,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    symbol: String,
    kind: StockKind,
    last_dividend: f64,
    par_value: f64,
}

impl Stock {
    /// Validating constructor. `fixed_dividend` must be given for preferred
    /// stock and omitted for common stock.
    pub fn new(
        symbol: impl Into<String>,
        stock_type: StockType,
        last_dividend: f64,
        par_value: f64,
        fixed_dividend: Option<f64>,
    ) -> Result<Self, GbceError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(GbceError::invalid("symbol", "must not be empty"));
        }
        if !last_dividend.is_finite() || last_dividend < 0.0 {
            return Err(GbceError::invalid(
                "last_dividend",
                format!("must be non-negative, got {last_dividend}"),
            ));
        }
        if !par_value.is_finite() || par_value <= 0.0 {
            return Err(GbceError::invalid(
                "par_value",
                format!("must be positive, got {par_value}"),
            ));
        }

        let kind = match (stock_type, fixed_dividend) {
            (StockType::Common, None) => StockKind::Common,
            (StockType::Common, Some(_)) => {
                return Err(GbceError::invalid(
                    "fixed_dividend",
                    "only preferred stock has a fixed dividend",
                ));
            }
            (StockType::Preferred, None) => {
                return Err(GbceError::invalid(
                    "fixed_dividend",
                    "required for preferred stock",
                ));
            }
            (StockType::Preferred, Some(fixed)) => {
                if !fixed.is_finite() || fixed < 0.0 {
                    return Err(GbceError::invalid(
                        "fixed_dividend",
                        format!("must be a non-negative fraction, got {fixed}"),
                    ));
                }
                StockKind::Preferred {
                    fixed_dividend: fixed,
                }
            }
        };

        Ok(Self {
            symbol,
            kind,
            last_dividend,
            par_value,
        })
    }

    pub fn common(
        symbol: impl Into<String>,
        last_dividend: f64,
        par_value: f64,
    ) -> Result<Self, GbceError> {
        Self::new(symbol, StockType::Common, last_dividend, par_value, None)
    }

    pub fn preferred(
        symbol: impl Into<String>,
        last_dividend: f64,
        par_value: f64,
        fixed_dividend: f64,
    ) -> Result<Self, GbceError> {
        Self::new(
            symbol,
            StockType::Preferred,
            last_dividend,
            par_value,
            Some(fixed_dividend),
        )
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn kind(&self) -> StockKind {
        self.kind
    }

    pub fn stock_type(&self) -> StockType {
        self.kind.stock_type()
    }

    pub fn last_dividend(&self) -> f64 {
        self.last_dividend
    }

    pub fn par_value(&self) -> f64 {
        self.par_value
    }

    pub fn fixed_dividend(&self) -> Option<f64> {
        match self.kind {
            StockKind::Common => None,
            StockKind::Preferred { fixed_dividend } => Some(fixed_dividend),
        }
    }

    /// Common: last_dividend / price.
    /// Preferred: fixed_dividend × par_value / price.
    pub fn dividend_yield_value(&self, price: f64) -> Result<f64, GbceError> {
        check_price(price)?;
        let dividend = match self.kind {
            StockKind::Common => self.last_dividend,
            StockKind::Preferred { fixed_dividend } => fixed_dividend * self.par_value,
        };
        Ok(dividend / price)
    }

    /// Dividend yield rendered as an unrounded percentage.
    pub fn dividend_yield(&self, price: f64) -> Result<String, GbceError> {
        self.dividend_yield_value(price).map(to_percent)
    }

    /// price / last_dividend, or `None` when no dividend has been paid.
    pub fn pe_ratio(&self, price: f64) -> Result<Option<f64>, GbceError> {
        check_price(price)?;
        if self.last_dividend == 0.0 {
            return Ok(None);
        }
        Ok(Some(price / self.last_dividend))
    }
}

fn check_price(price: f64) -> Result<(), GbceError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(GbceError::invalid(
            "price",
            format!("must be a positive number, got {price}"),
        ));
    }
    Ok(())
}
