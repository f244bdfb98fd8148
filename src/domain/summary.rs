//! Market summary: per-stock metrics at the last traded price plus the
//! market-wide aggregates.

use crate::domain::error::GbceError;
use crate::domain::format::to_currency;
use crate::domain::market::StockMarket;
use crate::domain::registry::StockRegistry;
use crate::domain::stock::StockType;
use chrono::{DateTime, Duration, Utc};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct StockSummary {
    pub symbol: String,
    pub stock_type: StockType,
    pub last_price: Option<f64>,
    pub dividend_yield: Option<String>,
    pub pe_ratio: Option<f64>,
    pub vwap: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketSummary {
    pub as_of: DateTime<Utc>,
    pub window: Duration,
    pub stocks: Vec<StockSummary>,
    pub vwap: Option<String>,
    pub gbce_index: Option<f64>,
    pub trade_count: usize,
    pub unknown_symbols: Vec<String>,
}

impl MarketSummary {
    /// Metrics that have nothing to compute over come back as `None`; any
    /// other failure is returned.
    pub fn build(
        registry: &StockRegistry,
        market: &StockMarket,
        as_of: DateTime<Utc>,
        window: Duration,
    ) -> Result<Self, GbceError> {
        let mut stocks = Vec::with_capacity(registry.len());
        for stock in registry.stocks() {
            let last_price = market.last_price(stock.symbol());
            let (dividend_yield, pe_ratio) = match last_price {
                Some(price) => (Some(stock.dividend_yield(price)?), stock.pe_ratio(price)?),
                None => (None, None),
            };
            let vwap = no_data_as_none(market.volume_weighted_price_value(
                as_of,
                window,
                Some(stock.symbol()),
            ))?
            .map(to_currency);

            stocks.push(StockSummary {
                symbol: stock.symbol().to_string(),
                stock_type: stock.stock_type(),
                last_price,
                dividend_yield,
                pe_ratio,
                vwap,
            });
        }

        let vwap = no_data_as_none(market.volume_weighted_price_value(as_of, window, None))?
            .map(to_currency);
        let gbce_index = no_data_as_none(market.gbce_index())?;

        Ok(Self {
            as_of,
            window,
            stocks,
            vwap,
            gbce_index,
            trade_count: market.len(),
            unknown_symbols: registry.unknown_symbols(market.trades()),
        })
    }

    /// Plain-text table for terminal output.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "GBCE summary as of {} ({} trades, {} minute window)",
            self.as_of.to_rfc3339(),
            self.trade_count,
            self.window.num_minutes()
        );
        let _ = writeln!(
            out,
            "{:<8} {:<10} {:>12} {:>22} {:>10} {:>12}",
            "Symbol", "Type", "Last", "Dividend Yield", "P/E", "VWAP"
        );
        for row in &self.stocks {
            let _ = writeln!(
                out,
                "{:<8} {:<10} {:>12} {:>22} {:>10} {:>12}",
                row.symbol,
                row.stock_type.to_string(),
                row.last_price.map(to_currency).unwrap_or_else(dash),
                row.dividend_yield.clone().unwrap_or_else(dash),
                row.pe_ratio
                    .map(|pe| format!("{pe:.2}"))
                    .unwrap_or_else(dash),
                row.vwap.clone().unwrap_or_else(dash),
            );
        }
        let _ = writeln!(
            out,
            "Volume weighted price: {}",
            self.vwap.clone().unwrap_or_else(dash)
        );
        let _ = writeln!(
            out,
            "GBCE all share index:  {}",
            self.gbce_index
                .map(|i| i.to_string())
                .unwrap_or_else(dash)
        );
        if !self.unknown_symbols.is_empty() {
            let _ = writeln!(
                out,
                "Unlisted symbols:      {}",
                self.unknown_symbols.join(", ")
            );
        }
        out
    }
}

fn dash() -> String {
    "-".to_string()
}

fn no_data_as_none<T>(result: Result<T, GbceError>) -> Result<Option<T>, GbceError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_no_data() => Ok(None),
        Err(e) => Err(e),
    }
}
