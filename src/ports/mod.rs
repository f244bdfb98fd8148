//! Port traits between the domain and its data sources.

pub mod config_port;
pub mod trade_port;
