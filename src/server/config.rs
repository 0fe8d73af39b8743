use chrono_tz::Tz;

use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::parse_timezone,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Every minute, at second zero.
const DEFAULT_COMPLETION_SWEEP_CRON: &str = "0 * * * * *";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Zone for salons that do not carry their own timezone.
    pub default_timezone: Tz,

    /// Six-field cron expression for the completion sweep.
    pub completion_sweep_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let default_timezone = match std::env::var("DEFAULT_TIMEZONE") {
            Ok(value) => parse_timezone(&value).map_err(|_| ConfigError::InvalidTimezone {
                var: "DEFAULT_TIMEZONE".to_string(),
                value,
            })?,
            Err(_) => Tz::UTC,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            default_timezone,
            completion_sweep_cron: std::env::var("COMPLETION_SWEEP_CRON")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_SWEEP_CRON.to_string()),
        })
    }
}
