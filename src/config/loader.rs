// config loaded from the environment with dashboard defaults
use crate::types::Config;
use anyhow::Result;
use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/trader";

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let request_timeout_secs = match env::var("TRADER_HTTP_TIMEOUT_SECS") {
            Ok(raw) => Some(raw.parse().map_err(|_| {
                anyhow::anyhow!("TRADER_HTTP_TIMEOUT_SECS must be a whole number of seconds")
            })?),
            Err(_) => None,
        };

        Ok(Config {
            base_url: env::var("TRADER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            request_timeout_secs,
        })
    }
}
