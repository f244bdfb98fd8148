//! Stock registry built from configuration.
//!
//! Each `[stock.<SYMBOL>]` section defines one listed stock:
//!
//! ```ini
//! [stock.GIN]
//! type = Preferred
//! last_dividend = 8
//! par_value = 100
//! fixed_dividend = 0.02
//! ```

use crate::domain::error::GbceError;
use crate::domain::stock::{Stock, StockType};
use crate::domain::trade::Trade;
use crate::ports::config_port::ConfigPort;
use std::collections::{BTreeMap, BTreeSet};

pub const STOCK_SECTION_PREFIX: &str = "stock.";

#[derive(Debug, Clone, Default)]
pub struct StockRegistry {
    stocks: BTreeMap<String, Stock>,
}

impl StockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, GbceError> {
        let mut sections: Vec<String> = config
            .sections()
            .into_iter()
            .filter(|s| s.to_lowercase().starts_with(STOCK_SECTION_PREFIX))
            .collect();
        sections.sort();

        if sections.is_empty() {
            return Err(GbceError::ConfigMissing {
                section: format!("{STOCK_SECTION_PREFIX}<SYMBOL>"),
                key: "type".to_string(),
            });
        }

        let mut registry = Self::new();
        for section in &sections {
            let stock = parse_stock(config, section)?;
            registry.insert(stock).map_err(|e| GbceError::ConfigInvalid {
                section: section.clone(),
                key: "symbol".to_string(),
                reason: e.to_string(),
            })?;
        }

        tracing::info!(count = registry.len(), "loaded stock registry");
        Ok(registry)
    }

    /// Adds a stock; a symbol may only be listed once.
    pub fn insert(&mut self, stock: Stock) -> Result<(), GbceError> {
        let symbol = stock.symbol().to_uppercase();
        if self.stocks.contains_key(&symbol) {
            return Err(GbceError::invalid(
                "symbol",
                format!("duplicate symbol {symbol}"),
            ));
        }
        self.stocks.insert(symbol, stock);
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&Stock> {
        self.stocks.get(&symbol.to_uppercase())
    }

    /// Like [`get`](Self::get) but an unlisted symbol is an error.
    pub fn require(&self, symbol: &str) -> Result<&Stock, GbceError> {
        self.get(symbol)
            .ok_or_else(|| GbceError::UnknownSymbol(symbol.to_uppercase()))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.stocks.keys().map(String::as_str)
    }

    pub fn stocks(&self) -> impl Iterator<Item = &Stock> {
        self.stocks.values()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Trade symbols with no listed stock, sorted and de-duplicated.
    pub fn unknown_symbols(&self, trades: &[Trade]) -> Vec<String> {
        let unknown: BTreeSet<&str> = trades
            .iter()
            .map(Trade::symbol)
            .filter(|s| self.get(s).is_none())
            .collect();
        for symbol in &unknown {
            tracing::warn!(symbol, "trade for unlisted stock");
        }
        unknown.into_iter().map(str::to_string).collect()
    }
}

fn parse_stock(config: &dyn ConfigPort, section: &str) -> Result<Stock, GbceError> {
    let lowered = section.to_lowercase();
    let symbol = lowered
        .strip_prefix(STOCK_SECTION_PREFIX)
        .map(|s| s.trim().to_uppercase())
        .unwrap_or_default();
    if symbol.is_empty() {
        return Err(GbceError::ConfigInvalid {
            section: section.to_string(),
            key: "symbol".to_string(),
            reason: "section name has no symbol".to_string(),
        });
    }

    let type_str = required(config, section, "type")?;
    let stock_type: StockType = type_str.parse()?;
    let last_dividend = parse_number(config, section, "last_dividend")?;
    let par_value = parse_number(config, section, "par_value")?;
    let fixed_dividend = match config.get_string(section, "fixed_dividend") {
        Some(_) => Some(parse_number(config, section, "fixed_dividend")?),
        None => None,
    };

    Stock::new(symbol, stock_type, last_dividend, par_value, fixed_dividend).map_err(|e| {
        match e {
            GbceError::InvalidArgument { field, reason } => GbceError::ConfigInvalid {
                section: section.to_string(),
                key: field,
                reason,
            },
            other => other,
        }
    })
}

fn required(config: &dyn ConfigPort, section: &str, key: &str) -> Result<String, GbceError> {
    config
        .get_string(section, key)
        .ok_or_else(|| GbceError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        })
}

fn parse_number(config: &dyn ConfigPort, section: &str, key: &str) -> Result<f64, GbceError> {
    let raw = required(config, section, key)?;
    raw.parse::<f64>().map_err(|_| GbceError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: format!("expected a number, got '{raw}'"),
    })
}
