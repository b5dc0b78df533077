use serde::{Deserialize, Serialize};

/// A canonical team record as returned by the sports service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
}

/// A single game record. Scores are absent until a game has started;
/// `status` carries free text with `"Final"` marking a completed game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default = "unknown_status")]
    pub status: String,
    pub home_team: Team,
    pub visitor_team: Team,
    #[serde(default)]
    pub home_team_score: Option<i32>,
    #[serde(default)]
    pub visitor_team_score: Option<i32>,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub postseason: Option<bool>,
}

fn unknown_status() -> String {
    "Unknown".to_string()
}

/// Single-page envelope used by both the teams and games endpoints.
/// Only one page is ever fetched; the page size caps are in
/// [`crate::constants::paging`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedData<T> {
    pub data: Vec<T>,
}

/// One active-alert feature from the weather service's GeoJSON feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

/// Alert fields, defaulted to display placeholders at the parse boundary
/// so formatting code never has to deal with absent values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertProperties {
    #[serde(default = "unknown_field")]
    pub event: String,
    #[serde(rename = "areaDesc", default = "unknown_field")]
    pub area_desc: String,
    #[serde(default = "unknown_field")]
    pub severity: String,
    #[serde(default = "no_description")]
    pub description: String,
    #[serde(default = "no_instructions")]
    pub instruction: String,
}

fn unknown_field() -> String {
    "Unknown".to_string()
}

fn no_description() -> String {
    "No description available".to_string()
}

fn no_instructions() -> String {
    "No specific instructions provided".to_string()
}

/// Response of the active-alerts-by-state-area endpoint. A payload without
/// a `features` key fails deserialization and is reported as malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsResponse {
    pub features: Vec<AlertFeature>,
}

/// Response of the forecast-grid lookup for a coordinate pair. The
/// forecast URL in here is followed verbatim, never constructed locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsProperties {
    #[serde(default)]
    pub forecast: Option<String>,
}

/// One forecast period. Every field is required; a period missing any of
/// them is a malformed response, not a defaulting case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: i32,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}
