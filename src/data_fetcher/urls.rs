//! URL building utilities for the upstream service endpoints

use crate::constants::paging;

/// Builds the games-by-date URL for the sports service.
/// A single page is fetched with an explicit page-size cap.
///
/// # Example
/// ```
/// use courtcast::data_fetcher::urls::games_by_date_url;
///
/// let url = games_by_date_url("https://api.example.com", "2024-01-15");
/// assert_eq!(
///     url,
///     "https://api.example.com/games?dates[]=2024-01-15&per_page=100"
/// );
/// ```
pub fn games_by_date_url(api_base: &str, date: &str) -> String {
    format!(
        "{api_base}/games?dates[]={date}&per_page={}",
        paging::GAMES_PAGE_SIZE
    )
}

/// Builds the games-by-team-and-season URL for the sports service.
///
/// # Example
/// ```
/// use courtcast::data_fetcher::urls::team_games_url;
///
/// let url = team_games_url("https://api.example.com", 14, 2023);
/// assert_eq!(
///     url,
///     "https://api.example.com/games?team_ids[]=14&seasons[]=2023&per_page=100"
/// );
/// ```
pub fn team_games_url(api_base: &str, team_id: i64, season: i32) -> String {
    format!(
        "{api_base}/games?team_ids[]={team_id}&seasons[]={season}&per_page={}",
        paging::GAMES_PAGE_SIZE
    )
}

/// Builds the full-season games URL used for standings aggregation.
/// The larger page size covers a whole regular season in one fetch.
///
/// # Example
/// ```
/// use courtcast::data_fetcher::urls::season_games_url;
///
/// let url = season_games_url("https://api.example.com", 2023);
/// assert_eq!(
///     url,
///     "https://api.example.com/games?seasons[]=2023&per_page=1000"
/// );
/// ```
pub fn season_games_url(api_base: &str, season: i32) -> String {
    format!(
        "{api_base}/games?seasons[]={season}&per_page={}",
        paging::SEASON_GAMES_PAGE_SIZE
    )
}

/// Builds the all-teams URL for the sports service.
///
/// # Example
/// ```
/// use courtcast::data_fetcher::urls::teams_url;
///
/// let url = teams_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/teams?per_page=100");
/// ```
pub fn teams_url(api_base: &str) -> String {
    format!("{api_base}/teams?per_page={}", paging::TEAMS_PAGE_SIZE)
}

/// Builds the active-alerts-by-state-area URL for the weather service.
/// The state code must already be validated and normalized to upper case.
///
/// # Example
/// ```
/// use courtcast::data_fetcher::urls::alerts_url;
///
/// let url = alerts_url("https://api.example.com", "CA");
/// assert_eq!(url, "https://api.example.com/alerts/active/area/CA");
/// ```
pub fn alerts_url(api_base: &str, state: &str) -> String {
    format!("{api_base}/alerts/active/area/{state}")
}

/// Builds the forecast-grid lookup URL for a coordinate pair.
/// The forecast URL itself comes back in the response and is followed
/// verbatim rather than constructed here.
///
/// # Example
/// ```
/// use courtcast::data_fetcher::urls::points_url;
///
/// let url = points_url("https://api.example.com", 38.5816, -121.4944);
/// assert_eq!(url, "https://api.example.com/points/38.5816,-121.4944");
/// ```
pub fn points_url(api_base: &str, latitude: f64, longitude: f64) -> String {
    format!("{api_base}/points/{latitude},{longitude}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_games_by_date_url() {
        assert_eq!(
            games_by_date_url("http://localhost:8080", "2024-03-01"),
            "http://localhost:8080/games?dates[]=2024-03-01&per_page=100"
        );
    }

    #[test]
    fn test_team_games_url() {
        assert_eq!(
            team_games_url("http://localhost:8080", 7, 2024),
            "http://localhost:8080/games?team_ids[]=7&seasons[]=2024&per_page=100"
        );
    }

    #[test]
    fn test_season_games_url_uses_large_page() {
        assert_eq!(
            season_games_url("http://localhost:8080", 2024),
            "http://localhost:8080/games?seasons[]=2024&per_page=1000"
        );
    }

    #[test]
    fn test_points_url_keeps_negative_longitude() {
        assert_eq!(
            points_url("http://localhost:8080", 40.0, -105.5),
            "http://localhost:8080/points/40,-105.5"
        );
    }
}
