//! CSV trade tape adapter.
//!
//! Expected header: `symbol,timestamp,quantity,indicator,price`, with RFC 3339
//! timestamps. Offsets are normalised to UTC.

use crate::domain::error::GbceError;
use crate::domain::trade::{Indicator, Trade};
use crate::ports::trade_port::TradePort;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TradePort for CsvAdapter {
    fn fetch_trades(&self) -> Result<Vec<Trade>, GbceError> {
        let content = fs::read_to_string(&self.path).map_err(|e| GbceError::TradeData {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        let trades = parse_trades(&content)?;
        tracing::info!(
            file = %self.path.display(),
            count = trades.len(),
            "loaded trade tape"
        );
        Ok(trades)
    }
}

/// Parse a CSV trade tape held in memory. Rows are numbered from 1, after the
/// header, in error messages.
pub fn parse_trades(content: &str) -> Result<Vec<Trade>, GbceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    let mut trades = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| GbceError::TradeData {
            reason: format!("CSV parse error: {}", e),
        })?;

        let column = |i: usize, name: &str| {
            record
                .get(i)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| GbceError::TradeData {
                    reason: format!("row {row}: missing {name} column"),
                })
        };

        let symbol = column(0, "symbol")?.to_uppercase();

        let timestamp_str = column(1, "timestamp")?;
        let timestamp = DateTime::parse_from_rfc3339(timestamp_str)
            .map_err(|e| GbceError::TradeData {
                reason: format!("row {row}: invalid timestamp '{timestamp_str}': {e}"),
            })?
            .with_timezone(&Utc);

        let quantity: u64 = column(2, "quantity")?
            .parse()
            .map_err(|e| GbceError::TradeData {
                reason: format!("row {row}: invalid quantity: {e}"),
            })?;

        let indicator: Indicator = column(3, "indicator")?
            .parse()
            .map_err(|e: GbceError| GbceError::TradeData {
                reason: format!("row {row}: {e}"),
            })?;

        let price: f64 = column(4, "price")?
            .parse()
            .map_err(|e| GbceError::TradeData {
                reason: format!("row {row}: invalid price: {e}"),
            })?;

        let trade = Trade::new(symbol, timestamp, quantity, indicator, price).map_err(|e| {
            GbceError::TradeData {
                reason: format!("row {row}: {e}"),
            }
        })?;
        trades.push(trade);
    }

    Ok(trades)
}
