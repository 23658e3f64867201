//! Configuration loading and representation.
//!
//! Values come from environment variables; anything unset falls back to a
//! default.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

pub const SEED_VAR: &str = "WAREHOUSE_SEED";
pub const SEED_DATE_VAR: &str = "WAREHOUSE_SEED_DATE";
pub const LOG_VAR: &str = "WAREHOUSE_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: expected a boolean (true/false/1/0/yes/no), got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: expected a date as YYYY-MM-DD, got {value:?}")]
    InvalidDate { var: &'static str, value: String },
}

/// Startup configuration for a warehouse process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseConfig {
    /// Populate the repositories with the startup stock.
    pub seed: bool,
    /// Reference date for seeded grocery expiry dates; `None` means today.
    pub seed_date: Option<NaiveDate>,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Variables that were unset or blank, so their default is in effect.
    pub defaulted: Vec<&'static str>,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            seed: true,
            seed_date: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            defaulted: Vec::new(),
        }
    }
}

impl WarehouseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match non_empty(lookup(SEED_VAR)) {
            Some(value) => config.seed = parse_bool(SEED_VAR, &value)?,
            None => config.defaulted.push(SEED_VAR),
        }

        match non_empty(lookup(SEED_DATE_VAR)) {
            Some(value) => {
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
                    ConfigError::InvalidDate {
                        var: SEED_DATE_VAR,
                        value: value.clone(),
                    }
                })?;
                config.seed_date = Some(date);
            }
            None => config.defaulted.push(SEED_DATE_VAR),
        }

        match non_empty(lookup(LOG_VAR)) {
            Some(value) => config.log_filter = value,
            None => config.defaulted.push(LOG_VAR),
        }

        Ok(config)
    }

    /// Warn once per variable that fell back to its default.
    ///
    /// Call after logging is initialized; the config is read before that.
    pub fn log_defaults(&self) {
        for var in &self.defaulted {
            let default = match *var {
                SEED_VAR => "true".to_string(),
                SEED_DATE_VAR => "today".to_string(),
                _ => self.log_filter.clone(),
            };
            warn!(var = *var, %default, "{var} not set; using default");
        }
    }

    /// The configured seed date, or `today` when none was given.
    pub fn seed_date_or(&self, today: NaiveDate) -> NaiveDate {
        self.seed_date.unwrap_or(today)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
