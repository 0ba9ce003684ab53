//! Environment configuration for the restaurant API client.

use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// No timeout when unset.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_string(), timeout: None }
    }
}

impl ApiConfig {
    /// Reads `RESTAURANT_API_URL` and `RESTAURANT_API_TIMEOUT_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("RESTAURANT_API_URL").unwrap_or(DEFAULT_API_URL.to_string());
        let timeout = match std::env::var("RESTAURANT_API_TIMEOUT_SECS") {
            Ok(secs) => Some(parse_timeout(&secs)?),
            Err(_) => None,
        };
        Ok(Self::new(base_url, timeout))
    }

    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, timeout }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn parse_timeout(secs: &str) -> anyhow::Result<Duration> {
    let secs: u64 = secs
        .trim()
        .parse()
        .with_context(|| format!("RESTAURANT_API_TIMEOUT_SECS is not a number of seconds: {secs:?}"))?;
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let config = ApiConfig::new("http://api.local:8000/", None);
        assert_eq!(config.url("/api/cuisines/"), "http://api.local:8000/api/cuisines/");
    }

    #[test]
    fn timeout_must_be_numeric() {
        assert_eq!(parse_timeout(" 15 ").unwrap(), Duration::from_secs(15));
        assert!(parse_timeout("soon").is_err());
    }
}
