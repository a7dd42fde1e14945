//! HTTP access to the National Weather Service API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::WeatherConfig;
use crate::error::{Result, WeatherError};

/// Thin GET-and-parse client shared by all tool invocations
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Client,
    api_base: String,
}

impl NwsClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_str(&config.accept)?);

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
        })
    }

    /// Active alerts endpoint for a state or area code
    pub fn alerts_url(&self, state: &str) -> String {
        format!("{}/alerts/active/area/{}", self.api_base, state)
    }

    /// Point metadata endpoint; coordinates are passed through unchecked
    pub fn points_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/points/{},{}",
            self.api_base,
            format_coordinate(latitude),
            format_coordinate(longitude)
        )
    }

    /// Makes an HTTP GET request and parses the JSON body.
    ///
    /// Connection errors, timeouts and non-2xx statuses are logged and
    /// returned as `Ok(None)`. A 2xx body that is not JSON is an error.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch(&self, url: &str) -> Result<Option<Value>> {
        debug!("Requesting {}", url);

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request error for {}: {}", url, e);
                return Ok(None);
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Request to {} failed with status: {}", url, status);
            return Ok(None);
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read response body from {}: {}", url, e);
                return Ok(None);
            }
        };

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|source| WeatherError::MalformedJson {
                url: url.to_string(),
                source,
            })
    }

    /// Like [`NwsClient::fetch`], then decodes the body into `T`
    pub async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        let Some(value) = self.fetch(url).await? else {
            return Ok(None);
        };

        decode(url, value).map(Some)
    }
}

/// Decodes a JSON value fetched from `url` into a typed record
pub fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| WeatherError::UnexpectedShape {
        url: url.to_string(),
        source,
    })
}

/// Whole-number coordinates keep one decimal place (`39.0`, not `39`)
fn format_coordinate(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
