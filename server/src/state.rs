//! Shared server state.
//!
//! DESIGN
//! ======
//! `AppState` is cloned into every handler, so it holds only cheap handles:
//! the parsed config behind an `Arc` and a pooled `reqwest::Client`.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Pooled HTTP client used to reach the upstream REST API.
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an upstream client honoring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialized.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
