//! Domain error types.

use chrono::{DateTime, Utc};

/// Top-level error type for gbce.
#[derive(Debug, thiserror::Error)]
pub enum GbceError {
    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("unsupported stock type: {0}")]
    UnsupportedStockType(String),

    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("no trades recorded since {cutoff}")]
    NoRecentTrades { cutoff: DateTime<Utc> },

    #[error("no trades recorded")]
    NoTrades,

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("trade data error: {reason}")]
    TradeData { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GbceError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        GbceError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// True for the "nothing to compute over" family.
    pub fn is_no_data(&self) -> bool {
        matches!(self, GbceError::NoRecentTrades { .. } | GbceError::NoTrades)
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            GbceError::Io(_) => 1,
            GbceError::ConfigParse { .. }
            | GbceError::ConfigMissing { .. }
            | GbceError::ConfigInvalid { .. } => 2,
            GbceError::TradeData { .. } => 3,
            GbceError::InvalidArgument { .. }
            | GbceError::UnsupportedStockType(_)
            | GbceError::UnknownSymbol(_) => 4,
            GbceError::NoRecentTrades { .. } | GbceError::NoTrades => 5,
        }
    }
}

impl From<&GbceError> for std::process::ExitCode {
    fn from(err: &GbceError) -> Self {
        std::process::ExitCode::from(err.exit_code())
    }
}
