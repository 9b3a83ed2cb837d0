//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` through `dotenvy` first, then calls
//! [`ServerConfig::from_env`]. Parsing itself goes through
//! [`ServerConfig::from_lookup`] so tests can feed values without touching the
//! process environment.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_URL: &str = "https://novademy-api.azurewebsites.net/api/v1";
pub const DEFAULT_PROXY_PREFIX: &str = "/api/v1";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    /// `NOVADEMY_API_URL` is not an absolute http(s) URL.
    #[error("NOVADEMY_API_URL must be an absolute http(s) URL, got {0:?}")]
    InvalidUpstreamUrl(String),

    /// `API_PROXY_PREFIX` does not start with `/` or is the bare root.
    #[error("API_PROXY_PREFIX must start with '/' and name a path, got {0:?}")]
    InvalidProxyPrefix(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream REST base, without a trailing slash.
    pub upstream_url: String,
    /// Local path prefix forwarded upstream, without a trailing slash.
    pub proxy_prefix: String,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `NOVADEMY_API_URL`: upstream REST base
    /// - `API_PROXY_PREFIX`: default `/api/v1`
    /// - `UPSTREAM_TIMEOUT_SECS`: default 10
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// Blank values count as unset. Timeouts that are missing, unparseable
    /// or zero fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an invalid port, upstream URL or prefix.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
        };

        let upstream_url = get("NOVADEMY_API_URL")
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(upstream_url.starts_with("http://") || upstream_url.starts_with("https://"))
            || upstream_url.ends_with("//")
        {
            return Err(ConfigError::InvalidUpstreamUrl(upstream_url));
        }

        let raw_prefix = get("API_PROXY_PREFIX").unwrap_or_else(|| DEFAULT_PROXY_PREFIX.to_owned());
        let proxy_prefix = raw_prefix.trim_end_matches('/').to_owned();
        if !proxy_prefix.starts_with('/') || proxy_prefix.len() < 2 {
            return Err(ConfigError::InvalidProxyPrefix(raw_prefix));
        }

        let timeouts = UpstreamTimeouts {
            request_secs: parse_secs(get("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS),
            connect_secs: parse_secs(get("UPSTREAM_CONNECT_TIMEOUT_SECS"), DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, upstream_url, proxy_prefix, timeouts })
    }
}

fn parse_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
