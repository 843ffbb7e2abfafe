use std::env;
use std::time::Duration;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub log_dir: String,
    pub poster_delay: Duration,
    pub public_base_url: String, // prefix for share links
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            log_dir: "./logs".to_string(),
            poster_delay: Duration::from_millis(2000),
            public_base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Validation(format!("PORT must be a number, got '{raw}'")))?,
            None => defaults.port,
        };

        let poster_delay = match lookup("POSTER_DELAY_MS") {
            Some(raw) => Duration::from_millis(raw.parse().map_err(|_| {
                AppError::Validation(format!("POSTER_DELAY_MS must be milliseconds, got '{raw}'"))
            })?),
            None => defaults.poster_delay,
        };

        Ok(Self {
            port,
            log_dir: lookup("LOG_DIR").unwrap_or(defaults.log_dir),
            poster_delay,
            public_base_url: lookup("PUBLIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.public_base_url),
        })
    }
}
