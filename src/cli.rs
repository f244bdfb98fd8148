//! CLI definition and dispatch.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{market_window, window_from_minutes};
use crate::domain::error::GbceError;
use crate::domain::format::to_currency;
use crate::domain::market::StockMarket;
use crate::domain::registry::StockRegistry;
use crate::domain::summary::MarketSummary;
use crate::domain::window::default_window;
use crate::ports::trade_port::TradePort;

#[derive(Parser, Debug)]
#[command(name = "gbce", about = "Super simple stock exchange calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print per-stock metrics and market aggregates
    Report {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        trades: PathBuf,
        /// Reference time (RFC 3339), defaults to now
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<DateTime<Utc>>,
    },
    /// Dividend yield of a stock at a given price
    DividendYield {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long)]
        price: f64,
    },
    /// Price/earnings ratio of a stock at a given price
    PeRatio {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long)]
        price: f64,
    },
    /// Volume weighted price over the trailing window
    Vwap {
        #[arg(short, long)]
        trades: PathBuf,
        #[arg(short, long)]
        symbol: Option<String>,
        /// Reference time (RFC 3339), defaults to now
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<DateTime<Utc>>,
        #[arg(long)]
        window_minutes: Option<i64>,
    },
    /// GBCE all share index over every recorded trade
    Index {
        #[arg(short, long)]
        trades: PathBuf,
    },
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

pub fn run(cli: Cli) -> ExitCode {
    match execute(&cli.command, Utc::now()) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Runs a command and returns what it would print. `now` stands in for any
/// `--at` that was not given.
pub fn execute(command: &Command, now: DateTime<Utc>) -> Result<String, GbceError> {
    match command {
        Command::Report { config, trades, at } => {
            run_report(config, trades, at.unwrap_or(now))
        }
        Command::DividendYield {
            config,
            symbol,
            price,
        } => {
            let registry = load_registry(config)?;
            let stock = registry.require(symbol)?;
            Ok(format!("{}\n", stock.dividend_yield(*price)?))
        }
        Command::PeRatio {
            config,
            symbol,
            price,
        } => {
            let registry = load_registry(config)?;
            let stock = registry.require(symbol)?;
            Ok(match stock.pe_ratio(*price)? {
                Some(pe) => format!("{pe}\n"),
                None => "n/a (no dividend)\n".to_string(),
            })
        }
        Command::Vwap {
            trades,
            symbol,
            at,
            window_minutes,
        } => {
            let market = load_market(trades)?;
            let window = match window_minutes {
                Some(m) => window_from_minutes(*m)?,
                None => default_window(),
            };
            let symbol = symbol.as_deref().map(str::to_uppercase);
            let vwap =
                market.volume_weighted_price_value(at.unwrap_or(now), window, symbol.as_deref())?;
            Ok(format!("{}\n", to_currency(vwap)))
        }
        Command::Index { trades } => {
            let market = load_market(trades)?;
            Ok(format!("{}\n", market.gbce_index()?))
        }
    }
}

fn run_report(
    config_path: &Path,
    trades_path: &Path,
    as_of: DateTime<Utc>,
) -> Result<String, GbceError> {
    let config = FileConfigAdapter::from_file(config_path)?;
    let registry = StockRegistry::from_config(&config)?;
    let window = market_window(&config)?;
    let market = load_market(trades_path)?;

    tracing::info!(
        stocks = registry.len(),
        trades = market.len(),
        as_of = %as_of.to_rfc3339(),
        "building market summary"
    );
    let summary = MarketSummary::build(&registry, &market, as_of, window)?;
    Ok(summary.render())
}

pub fn load_registry(path: &Path) -> Result<StockRegistry, GbceError> {
    tracing::info!(file = %path.display(), "loading stock registry");
    let config = FileConfigAdapter::from_file(path)?;
    StockRegistry::from_config(&config)
}

pub fn load_market(path: &Path) -> Result<StockMarket, GbceError> {
    let trades = CsvAdapter::new(path.to_path_buf()).fetch_trades()?;
    Ok(StockMarket::new(trades))
}
