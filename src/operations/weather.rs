//! Weather operations: active alerts by state and point forecasts.
//!
//! The forecast lookup is a two-step chain: a grid lookup for the
//! coordinates yields a forecast URL, which is then fetched verbatim.
//! Both calls carry the User-Agent and GeoJSON Accept headers the
//! weather service requires.

use reqwest::Client;
use tracing::warn;

use crate::config::Config;
use crate::constants::{WEATHER_ACCEPT, WEATHER_USER_AGENT, coverage};
use crate::data_fetcher::client::fetch;
use crate::data_fetcher::models::{AlertsResponse, ForecastResponse, PointsResponse};
use crate::data_fetcher::urls;
use crate::render::{format_alert, format_forecast};

fn weather_headers() -> [(&'static str, &'static str); 2] {
    [
        ("User-Agent", WEATHER_USER_AGENT),
        ("Accept", WEATHER_ACCEPT),
    ]
}

/// Returns active weather alerts for a US state.
///
/// The state code is trimmed and upper-cased, and must be exactly two
/// alphabetic characters; anything else is rejected before any fetch.
pub async fn get_alerts(client: &Client, config: &Config, state: &str) -> String {
    let state = state.trim().to_uppercase();
    if state.chars().count() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
        return format!(
            "Error: Invalid state code '{state}'. Please use a two-letter US state code \
             (e.g., CA, NY, TX)."
        );
    }

    let url = urls::alerts_url(&config.weather_api_base, &state);
    let alerts = match fetch::<AlertsResponse>(client, &url, &weather_headers()).await {
        Ok(response) => response.features,
        Err(e) if e.is_malformed_response() => {
            warn!("Alerts response for {state} was malformed: {e}");
            return format!(
                "Error: Invalid response format when fetching alerts for state '{state}'."
            );
        }
        Err(e) => {
            warn!("Alerts fetch for {state} failed: {e}");
            return format!(
                "Error: Unable to fetch alerts for state '{state}'. This may be due to \
                 network issues or the weather service being temporarily unavailable."
            );
        }
    };

    if alerts.is_empty() {
        return format!("No active weather alerts for state '{state}'.");
    }

    alerts
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join("\n---\n")
}

/// Returns the forecast for a coordinate pair inside the continental US.
///
/// Coordinates outside the service's approximate coverage box are
/// rejected before any fetch with an out-of-coverage message, which is
/// deliberately distinct from the transient-unavailability wording.
pub async fn get_forecast(
    client: &Client,
    config: &Config,
    latitude: f64,
    longitude: f64,
) -> String {
    if !(coverage::LATITUDE_MIN..=coverage::LATITUDE_MAX).contains(&latitude)
        || !(coverage::LONGITUDE_MIN..=coverage::LONGITUDE_MAX).contains(&longitude)
    {
        return format!(
            "Error: The National Weather Service API only provides forecasts for locations \
             within the United States. The coordinates ({latitude}, {longitude}) appear to \
             be outside this range. Please use US coordinates."
        );
    }

    let points_url = urls::points_url(&config.weather_api_base, latitude, longitude);
    let points = match fetch::<PointsResponse>(client, &points_url, &weather_headers()).await {
        Ok(response) => response,
        Err(e) if e.is_malformed_response() => {
            warn!("Grid lookup for ({latitude}, {longitude}) was malformed: {e}");
            return format!(
                "Error: Invalid response from weather service for location \
                 ({latitude}, {longitude})."
            );
        }
        Err(e) => {
            warn!("Grid lookup for ({latitude}, {longitude}) failed: {e}");
            return format!(
                "Error: Unable to fetch forecast data for location ({latitude}, {longitude}). \
                 This may be because:\n\
                 - The location is outside the United States (NWS API only covers US territories)\n\
                 - Network connectivity issues\n\
                 - The NWS API is temporarily unavailable\n\n\
                 Please verify the coordinates are within the US and try again."
            );
        }
    };

    let Some(forecast_url) = points.properties.forecast else {
        return format!(
            "Error: No forecast available for location ({latitude}, {longitude}). This \
             location may not be covered by the National Weather Service."
        );
    };

    let periods = match fetch::<ForecastResponse>(client, &forecast_url, &weather_headers()).await
    {
        Ok(response) => response.properties.periods,
        Err(e) if e.is_malformed_response() => {
            warn!("Forecast response for ({latitude}, {longitude}) was malformed: {e}");
            return format!(
                "Error: Invalid forecast data structure received for location \
                 ({latitude}, {longitude})."
            );
        }
        Err(e) => {
            warn!("Forecast fetch for ({latitude}, {longitude}) failed: {e}");
            return format!(
                "Error: Unable to fetch detailed forecast for location \
                 ({latitude}, {longitude}). The forecast service may be temporarily \
                 unavailable."
            );
        }
    };

    if periods.is_empty() {
        return format!("No forecast periods available for location ({latitude}, {longitude}).");
    }

    format_forecast(&periods)
}
