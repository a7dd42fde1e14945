use crate::constants::{MAX_FORECAST_PERIODS, PLACEHOLDER};
use crate::models::{AlertFeature, ForecastPeriod};

/// Formats a single alert as a labeled text block
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    let field = |value: &Option<String>| value.as_deref().unwrap_or(PLACEHOLDER).to_string();

    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}\n",
        field(&props.event),
        field(&props.area_desc),
        field(&props.severity),
        field(&props.description),
        field(&props.instruction)
    )
}

/// Formats every alert, one block each
pub fn format_alerts(features: &[AlertFeature]) -> String {
    features
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_period(period: &ForecastPeriod) -> String {
    format!(
        "Name: {}\nTemperature: {} {}\nWind: {} {}\nShort Forecast: {}\nDetailed Forecast: {}\n",
        period.name,
        period.temperature,
        period.temperature_unit,
        period.wind_speed,
        period.wind_direction,
        period.short_forecast,
        period.detailed_forecast
    )
}

/// Formats the leading forecast periods in upstream order
pub fn format_forecast(periods: &[ForecastPeriod]) -> String {
    periods
        .iter()
        .take(MAX_FORECAST_PERIODS)
        .map(format_period)
        .collect::<Vec<_>>()
        .join("\n")
}
