use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde_json::Value;
use std::sync::Arc;

use crate::client::{decode, NwsClient};
use crate::config::WeatherConfig;
use crate::constants::{FORECAST_UNAVAILABLE, NO_ACTIVE_ALERTS, NO_ALERTS_FOUND};
use crate::error::WeatherError;
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{
    AlertFeature, ForecastCollection, GetAlertsRequest, GetForecastRequest, PointsMetadata,
};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: Arc<NwsClient>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance against the public NWS API
    pub fn new() -> Result<Self> {
        Self::with_config(WeatherConfig::default())
    }

    /// Creates a Weather service with custom upstream settings
    pub fn with_config(config: WeatherConfig) -> Result<Self> {
        let client = NwsClient::new(&config)?;

        Ok(Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        })
    }

    /// Active alerts for a state, rendered as text
    pub async fn alerts(&self, state: &str) -> Result<String, WeatherError> {
        let url = self.client.alerts_url(state);

        let Some(mut body) = self.client.fetch(&url).await? else {
            return Ok(NO_ALERTS_FOUND.to_string());
        };

        // Non-object bodies have no `features` either
        let features: Vec<AlertFeature> = match body.get_mut("features").map(Value::take) {
            None => return Ok(NO_ALERTS_FOUND.to_string()),
            Some(Value::Null) => Vec::new(),
            Some(features) => decode(&url, features)?,
        };

        if features.is_empty() {
            return Ok(NO_ACTIVE_ALERTS.to_string());
        }

        tracing::debug!("Formatting {} alerts for {}", features.len(), state);
        Ok(format_alerts(&features))
    }

    /// Short-term forecast for a coordinate, rendered as text.
    ///
    /// The forecast URL comes out of the points response, so the two
    /// requests always run one after the other.
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> Result<String, WeatherError> {
        let points_url = self.client.points_url(latitude, longitude);

        let Some(points) = self.client.fetch_as::<PointsMetadata>(&points_url).await? else {
            return Ok(FORECAST_UNAVAILABLE.to_string());
        };

        let forecast_url = points.properties.forecast;
        let Some(forecast) = self
            .client
            .fetch_as::<ForecastCollection>(&forecast_url)
            .await?
        else {
            return Ok(FORECAST_UNAVAILABLE.to_string());
        };

        Ok(format_forecast(&forecast.properties.periods))
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nws-weather-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts and short-term forecasts for US locations, \
                from the National Weather Service API."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    #[tool(description = "Get weather alerts for a US state. Provide a two-letter state code (e.g. CA, NY, TX).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let text = self.alerts(&request.state).await?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get weather forecast for a location. Provide latitude and longitude.")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self.forecast(request.latitude, request.longitude).await?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
