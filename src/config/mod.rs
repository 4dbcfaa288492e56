use std::env;

use crate::calculator::DEFAULT_CURRENCY_SYMBOL;
use crate::models::inputs::DEFAULT_INVESTMENT;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Investment text the form starts with. Reset ignores it.
    pub default_investment: String,
    pub currency_symbol: String,
    pub log_json: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Unset falls back to false; a set but malformed value is an error.
        let log_json = match lookup("PNLCALC_LOG_JSON") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("PNLCALC_LOG_JSON must be true or false, got {raw:?}")
            })?,
            None => false,
        };

        Ok(Self {
            default_investment: lookup("PNLCALC_DEFAULT_INVESTMENT")
                .unwrap_or_else(|| DEFAULT_INVESTMENT.into()),
            currency_symbol: lookup("PNLCALC_CURRENCY_SYMBOL")
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.into()),
            log_json,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_investment: DEFAULT_INVESTMENT.into(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
            log_json: false,
        }
    }
}
