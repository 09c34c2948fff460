use crate::error::MetricsError;

/// Environment variable holding the GitHub token
pub const ENV_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL
pub const ENV_API_URL_VAR: &str = "GITHUB_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Settings shared by every binary, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub api_base_url: String,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::MissingToken` if `GITHUB_TOKEN` is unset or blank.
    pub fn from_env() -> Result<Self, MetricsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MetricsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_TOKEN_VAR)
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .ok_or(MetricsError::MissingToken(ENV_TOKEN_VAR))?;

        let config = Self::new(token);
        match lookup(ENV_API_URL_VAR).map(|val| val.trim().to_string()) {
            Some(url) if !url.is_empty() => Ok(config.with_api_base_url(url)),
            _ => Ok(config),
        }
    }
}
