//! Market configuration validation.

use crate::domain::error::GbceError;
use crate::domain::window::DEFAULT_WINDOW_MINUTES;
use crate::ports::config_port::ConfigPort;
use chrono::Duration;

/// Longest accepted trailing window, one week.
const MAX_WINDOW_MINUTES: i64 = 7 * 24 * 60;

/// Trailing VWAP window from `[market] window_minutes`, defaulting to 15.
pub fn market_window(config: &dyn ConfigPort) -> Result<Duration, GbceError> {
    let minutes = match config.get_string("market", "window_minutes") {
        None => DEFAULT_WINDOW_MINUTES,
        Some(raw) => raw.parse::<i64>().map_err(|_| invalid_window(&raw))?,
    };
    window_from_minutes(minutes).map_err(|_| invalid_window(&minutes.to_string()))
}

/// Validates a window length given in minutes.
pub fn window_from_minutes(minutes: i64) -> Result<Duration, GbceError> {
    if minutes <= 0 || minutes > MAX_WINDOW_MINUTES {
        return Err(GbceError::invalid(
            "window_minutes",
            format!("must be between 1 and {MAX_WINDOW_MINUTES}, got {minutes}"),
        ));
    }
    Ok(Duration::minutes(minutes))
}

fn invalid_window(raw: &str) -> GbceError {
    GbceError::ConfigInvalid {
        section: "market".to_string(),
        key: "window_minutes".to_string(),
        reason: format!("expected whole minutes between 1 and {MAX_WINDOW_MINUTES}, got '{raw}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn window(ini: &str) -> Result<Duration, GbceError> {
        market_window(&FileConfigAdapter::from_string(ini).unwrap())
    }

    #[test]
    fn defaults_to_fifteen_minutes() {
        assert_eq!(window("[stock.tea]\ntype = Common\n").unwrap(), Duration::minutes(15));
    }

    #[test]
    fn reads_configured_window() {
        assert_eq!(
            window("[market]\nwindow_minutes = 30\n").unwrap(),
            Duration::minutes(30)
        );
    }

    #[test]
    fn rejects_non_numeric_window() {
        assert!(matches!(
            window("[market]\nwindow_minutes = soon\n"),
            Err(GbceError::ConfigInvalid { ref key, .. }) if key == "window_minutes"
        ));
    }

    #[test]
    fn rejects_out_of_range_window() {
        assert!(window("[market]\nwindow_minutes = 0\n").is_err());
        assert!(window("[market]\nwindow_minutes = -15\n").is_err());
        assert!(window("[market]\nwindow_minutes = 20000\n").is_err());
    }

    #[test]
    fn window_from_minutes_bounds() {
        assert_eq!(window_from_minutes(1).unwrap(), Duration::minutes(1));
        assert_eq!(
            window_from_minutes(MAX_WINDOW_MINUTES).unwrap(),
            Duration::minutes(MAX_WINDOW_MINUTES)
        );
        assert!(matches!(
            window_from_minutes(0),
            Err(GbceError::InvalidArgument { .. })
        ));
    }
}
