use std::time::Duration;

use crate::constants::{ACCEPT_GEO_JSON, NWS_API_BASE, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Settings for the upstream weather API
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_base: String,
    pub user_agent: String,
    pub accept: String,
    pub timeout: Duration,
}

impl WeatherConfig {
    /// Same settings, pointed at a different API root
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Same settings, with a different per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            accept: ACCEPT_GEO_JSON.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}
