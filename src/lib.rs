//! gbce — a toy stock exchange: stock reference data, a trade tape, and the
//! metrics derived from them.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], command-line front end in [`cli`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;

pub use domain::error::GbceError;
pub use domain::market::StockMarket;
pub use domain::stock::{Stock, StockKind, StockType};
pub use domain::trade::{Indicator, Trade};
