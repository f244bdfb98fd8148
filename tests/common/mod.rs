#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use gbce::domain::error::GbceError;
use gbce::domain::registry::StockRegistry;
use gbce::ports::trade_port::TradePort;
pub use gbce::{Indicator, Stock, StockMarket, Trade};

pub const QUANTITIES: [u64; 3] = [100, 200, 50];
pub const PRICES: [f64; 3] = [50.0, 55.0, 35.76];
pub const SYMBOLS: [&str; 3] = ["TEA", "GIN", "JOE"];

pub const GBCE_INI: &str = r#"
[market]
window_minutes = 15

[stock.TEA]
type = Common
last_dividend = 0
par_value = 100

[stock.POP]
type = Common
last_dividend = 8
par_value = 100

[stock.ALE]
type = Common
last_dividend = 23
par_value = 60

[stock.GIN]
type = Preferred
last_dividend = 8
par_value = 100
fixed_dividend = 0.02

[stock.JOE]
type = Common
last_dividend = 13
par_value = 250
"#;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// Sample GBCE listing: TEA, POP, ALE, GIN (preferred), JOE.
pub fn stocks() -> Vec<Stock> {
    vec![
        Stock::common("TEA", 0.0, 100.0).unwrap(),
        Stock::common("POP", 8.0, 100.0).unwrap(),
        Stock::common("ALE", 23.0, 60.0).unwrap(),
        Stock::preferred("GIN", 8.0, 100.0, 0.02).unwrap(),
        Stock::common("JOE", 13.0, 250.0).unwrap(),
    ]
}

pub fn registry() -> StockRegistry {
    let mut registry = StockRegistry::new();
    for stock in stocks() {
        registry.insert(stock).unwrap();
    }
    registry
}

/// Three buys stamped 2 seconds, 1 minute and 20 minutes before `now()`.
pub fn trades() -> Vec<Trade> {
    let moments = [
        now() - Duration::seconds(2),
        now() - Duration::minutes(1),
        now() - Duration::minutes(20),
    ];
    (0..3)
        .map(|i| {
            Trade::new(SYMBOLS[i], moments[i], QUANTITIES[i], Indicator::Buy, PRICES[i]).unwrap()
        })
        .collect()
}

pub fn stock_market() -> StockMarket {
    StockMarket::new(trades())
}

/// Same tape as [`trades`], as CSV.
pub fn trades_csv() -> String {
    let mut csv = String::from("symbol,timestamp,quantity,indicator,price\n");
    for trade in trades() {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            trade.symbol(),
            trade.timestamp().to_rfc3339(),
            trade.quantity(),
            trade.indicator(),
            trade.price()
        ));
    }
    csv
}

pub struct MockTradePort {
    pub trades: Vec<Trade>,
    pub error: Option<String>,
}

impl MockTradePort {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self {
            trades,
            error: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            trades: Vec::new(),
            error: Some(reason.to_string()),
        }
    }
}

impl TradePort for MockTradePort {
    fn fetch_trades(&self) -> Result<Vec<Trade>, GbceError> {
        if let Some(reason) = &self.error {
            return Err(GbceError::TradeData {
                reason: reason.clone(),
            });
        }
        Ok(self.trades.clone())
    }
}
