//! Application configuration loaded from environment variables.
//!
//! Every variable is optional:
//! - `HYPERLIQUID_INFO_URL`: price-feed endpoint (`POST /info`)
//! - `HYPERLIQUID_APP_URL`: web app base used for per-asset trade links
//! - `PERPWATCH_TIMEOUT_MS`: HTTP request timeout in milliseconds

use std::time::Duration;

use crate::PerpwatchError;

/// Default public info endpoint.
const DEFAULT_INFO_URL: &str = "https://api.hyperliquid.xyz/info";

/// Default web app base.
const DEFAULT_APP_URL: &str = "https://app.hyperliquid.xyz";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub info_url: String,
    pub app_url: String,
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            info_url: DEFAULT_INFO_URL.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl AppConfig {
    /// Returns the web page for trading `symbol`: `<app-url>/trade/<symbol>`.
    pub fn trade_url(&self, symbol: &str) -> String {
        format!("{}/trade/{symbol}", self.app_url.trim_end_matches('/'))
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`PerpwatchError::Config`] if `PERPWATCH_TIMEOUT_MS` is set but
/// is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let info_url =
        non_empty_var("HYPERLIQUID_INFO_URL").unwrap_or_else(|| DEFAULT_INFO_URL.to_string());
    let app_url =
        non_empty_var("HYPERLIQUID_APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string());

    let timeout_ms = match non_empty_var("PERPWATCH_TIMEOUT_MS") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(ms) if ms > 0 => ms,
            _ => {
                return Err(PerpwatchError::Config(format!(
                    "PERPWATCH_TIMEOUT_MS must be a positive integer, got {raw:?}"
                )));
            }
        },
        None => DEFAULT_TIMEOUT_MS,
    };

    Ok(AppConfig {
        info_url,
        app_url,
        timeout: Duration::from_millis(timeout_ms),
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
