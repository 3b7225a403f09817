//! Environment configuration of the Foodbook API connection.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5080/api";
pub const DEFAULT_SESSION_COOKIE: &str = "foodbook_session";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct FoodbookConfig {
    /// Base URL without trailing slash.
    pub api_url: String,
    pub api_key: Option<String>,
    pub session_cookie_name: String,
    pub request_timeout: Duration,
}

impl FoodbookConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            session_cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::new(var_or("FOODBOOK_API_URL", DEFAULT_API_URL));
        config.api_key = env::var("FOODBOOK_API_KEY").ok().filter(|k| !k.trim().is_empty());
        config.session_cookie_name = var_or("FOODBOOK_SESSION_COOKIE", DEFAULT_SESSION_COOKIE);
        config.request_timeout = Duration::from_secs(parse_or("FOODBOOK_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS));
        config
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse_or<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => default,
    }
}
