//! Core domain types and logic.

pub mod config_validation;
pub mod error;
pub mod format;
pub mod market;
pub mod registry;
pub mod stock;
pub mod summary;
pub mod trade;
pub mod window;
