use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "Portfolio-App";
/// Lifetime hint, in seconds, sent to intermediaries on every request.
pub const DEFAULT_CACHE_MAX_AGE: u64 = 900;

/// Settings shared by the HTTP adapter and the aggregator.
///
/// Both `github_token` and `github_username` may be absent here. Operations
/// that need them fail with [`crate::Error::Config`] when they are called,
/// so a missing setting never aborts the process on its own.
#[derive(Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub github_username: Option<String>,
    pub api_base_url: String,
    pub user_agent: String,
    pub cache_max_age: u64,
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn new(github_token: Option<String>, github_username: Option<String>) -> Self {
        Self {
            github_token,
            github_username,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
            request_timeout: None,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let github_token = non_empty("GITHUB_TOKEN");
        let github_username = non_empty("GITHUB_USERNAME");

        let api_base_url = non_empty("GITHUB_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let user_agent =
            non_empty("GITHUB_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let cache_max_age = non_empty("GITHUB_CACHE_MAX_AGE")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CACHE_MAX_AGE);

        let request_timeout = non_empty("GITHUB_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs);

        Self {
            github_token,
            github_username,
            api_base_url,
            user_agent,
            cache_max_age,
            request_timeout,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .field("github_username", &self.github_username)
            .field("api_base_url", &self.api_base_url)
            .field("user_agent", &self.user_agent)
            .field("cache_max_age", &self.cache_max_age)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
