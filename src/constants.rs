//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default base URL for the sports data service
pub const DEFAULT_SPORTS_API_BASE: &str = "https://www.balldontlie.io/api/v1";

/// Default base URL for the weather data service
pub const DEFAULT_WEATHER_API_BASE: &str = "https://api.weather.gov";

/// User-Agent sent to the weather service, which rejects anonymous clients
pub const WEATHER_USER_AGENT: &str = "courtcast/0.1";

/// Accept header for the weather service's GeoJSON endpoints
pub const WEATHER_ACCEPT: &str = "application/geo+json";

/// Maximum number of characters from an error response body included in logs
pub const ERROR_BODY_EXCERPT_CHARS: usize = 200;

/// Game status value that marks a completed game
pub const FINAL_STATUS: &str = "Final";

/// Single-page fetch sizes for the sports service endpoints
pub mod paging {
    /// Page size when fetching the canonical team list
    pub const TEAMS_PAGE_SIZE: u32 = 100;

    /// Page size when fetching games for a date or a team's season
    pub const GAMES_PAGE_SIZE: u32 = 100;

    /// Page size when fetching a full season of games for standings
    pub const SEASON_GAMES_PAGE_SIZE: u32 = 1000;
}

/// Output size caps applied when rendering
pub mod display {
    /// Maximum number of schedule games rendered before the overflow trailer
    pub const SCHEDULE_GAME_LIMIT: usize = 20;

    /// Maximum number of forecast periods rendered
    pub const FORECAST_PERIOD_LIMIT: usize = 5;

    /// Width of the dash rule under standings section headers
    pub const STANDINGS_RULE_WIDTH: usize = 50;
}

/// Approximate continental-US bounding box accepted by the weather service
pub mod coverage {
    pub const LATITUDE_MIN: f64 = 24.0;
    pub const LATITUDE_MAX: f64 = 50.0;
    pub const LONGITUDE_MIN: f64 = -125.0;
    pub const LONGITUDE_MAX: f64 = -66.0;
}

/// Conference literals recognized when bucketing standings.
/// Any other value is excluded from both groups; this is a known
/// data-quality assumption of the upstream team records.
pub mod conference {
    pub const EAST: &str = "East";
    pub const WEST: &str = "West";
}
