//! nws-weather-mcp: serves the `get_alerts` and `get_forecast` tools on stdio.

use anyhow::Result;
use nws_weather_mcp::Weather;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol stream
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nws_weather_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let weather = Weather::new()?;
    tracing::info!(
        "Starting nws-weather-mcp {} on stdio",
        env!("CARGO_PKG_VERSION")
    );

    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Client disconnected, shutting down");
    Ok(())
}
