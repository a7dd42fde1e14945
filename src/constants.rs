/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// Media type requested from the NWS API
pub const ACCEPT_GEO_JSON: &str = "application/geo+json";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Total time allowed for a single upstream request
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Number of forecast periods rendered by `get_forecast`
pub const MAX_FORECAST_PERIODS: usize = 3;

/// Substituted for alert fields the upstream omits
pub const PLACEHOLDER: &str = "N/A";

pub const NO_ALERTS_FOUND: &str = "No alerts found or invalid state code.";
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for your state";
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";
