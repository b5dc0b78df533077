//! Pure transforms from fetched records to display text.
//!
//! These never touch the network and never fail: optional fields fall back
//! to documented placeholders, and structurally required fields (forecast
//! periods) are guaranteed present by the parse boundary.

use crate::constants::display::FORECAST_PERIOD_LIMIT;
use crate::data_fetcher::models::{AlertFeature, ForecastPeriod, Game};
use chrono::{DateTime, NaiveDate};
use std::cmp::Ordering;

/// Renders one game as a multi-line text block: matchup, date, status,
/// and a score plus winner line once both scores are present. Equal
/// scores render as a tie; no winner is declared.
pub fn format_game(game: &Game) -> String {
    let home_name = non_empty_or(&game.home_team.full_name, "Home Team");
    let visitor_name = non_empty_or(&game.visitor_team.full_name, "Away Team");

    let date_str = if game.date.is_empty() {
        String::new()
    } else {
        format_game_date(&game.date)
    };

    let mut result = format!(
        "{visitor_name} @ {home_name}\nDate: {date_str}\nStatus: {}\n",
        game.status
    );

    if let (Some(home_score), Some(visitor_score)) =
        (game.home_team_score, game.visitor_team_score)
    {
        let home_abbr = non_empty_or(&game.home_team.abbreviation, "HME");
        let visitor_abbr = non_empty_or(&game.visitor_team.abbreviation, "AWY");
        result.push_str(&format!(
            "Score: {visitor_abbr} {visitor_score} - {home_score} {home_abbr}\n"
        ));

        match home_score.cmp(&visitor_score) {
            Ordering::Greater => result.push_str(&format!("Winner: {home_name}\n")),
            Ordering::Less => result.push_str(&format!("Winner: {visitor_name}\n")),
            Ordering::Equal => result.push_str("Result: Tie\n"),
        }
    }

    if let Some(season) = game.season {
        result.push_str(&format!("Season: {season}\n"));
    }

    if game.postseason.unwrap_or(false) {
        result.push_str("Playoff Game: Yes\n");
    }

    result.trim().to_string()
}

/// Parses an ISO-8601 game date into a human-readable form, falling back
/// to the raw string when it is in neither full timestamp nor plain date
/// form.
fn format_game_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%B %d, %Y at %I:%M %p").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %d, %Y").to_string();
    }
    raw.to_string()
}

/// Renders one alert feature. Placeholder defaults were already applied
/// when the response was parsed, so every field prints directly.
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
        props.event, props.area_desc, props.severity, props.description, props.instruction
    )
}

/// Renders forecast periods in input order, capped at the first five to
/// bound the response size.
pub fn format_forecast(periods: &[ForecastPeriod]) -> String {
    periods
        .iter()
        .take(FORECAST_PERIOD_LIMIT)
        .map(|period| {
            format!(
                "{}:\nTemperature: {}°{}\nWind: {} {}\nForecast: {}",
                period.name,
                period.temperature,
                period.temperature_unit,
                period.wind_speed,
                period.wind_direction,
                period.detailed_forecast
            )
        })
        .collect::<Vec<_>>()
        .join("\n---\n")
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{AlertProperties, Team};

    fn team(id: i64, full_name: &str, abbreviation: &str) -> Team {
        Team {
            id,
            full_name: full_name.to_string(),
            abbreviation: abbreviation.to_string(),
            city: String::new(),
            name: String::new(),
            conference: None,
            division: None,
        }
    }

    fn game(home_score: Option<i32>, visitor_score: Option<i32>) -> Game {
        Game {
            id: 1,
            date: "2024-01-15T19:30:00Z".to_string(),
            status: "Final".to_string(),
            home_team: team(1, "Boston Celtics", "BOS"),
            visitor_team: team(2, "Los Angeles Lakers", "LAL"),
            home_team_score: home_score,
            visitor_team_score: visitor_score,
            season: None,
            postseason: None,
        }
    }

    #[test]
    fn test_format_game_with_winner() {
        let output = format_game(&game(Some(110), Some(102)));
        assert!(output.starts_with("Los Angeles Lakers @ Boston Celtics"));
        assert!(output.contains("Date: January 15, 2024 at 07:30 PM"));
        assert!(output.contains("Status: Final"));
        assert!(output.contains("Score: LAL 102 - 110 BOS"));
        assert!(output.contains("Winner: Boston Celtics"));
    }

    #[test]
    fn test_format_game_visitor_winner() {
        let output = format_game(&game(Some(98), Some(101)));
        assert!(output.contains("Winner: Los Angeles Lakers"));
    }

    #[test]
    fn test_format_game_tie_has_no_winner() {
        let output = format_game(&game(Some(100), Some(100)));
        assert!(output.contains("Result: Tie"));
        assert!(!output.contains("Winner:"));
    }

    #[test]
    fn test_format_game_without_scores_has_no_score_line() {
        let output = format_game(&game(None, None));
        assert!(!output.contains("Score:"));
        assert!(!output.contains("Winner:"));
        assert!(!output.contains("Result:"));
    }

    #[test]
    fn test_format_game_one_score_missing_has_no_score_line() {
        let output = format_game(&game(Some(50), None));
        assert!(!output.contains("Score:"));
    }

    #[test]
    fn test_format_game_season_and_playoff_markers() {
        let mut g = game(Some(120), Some(117));
        g.season = Some(2023);
        g.postseason = Some(true);
        let output = format_game(&g);
        assert!(output.contains("Season: 2023"));
        assert!(output.ends_with("Playoff Game: Yes"));
    }

    #[test]
    fn test_format_game_placeholders_for_empty_names() {
        let mut g = game(Some(90), Some(80));
        g.home_team = team(1, "", "");
        g.visitor_team = team(2, "", "");
        let output = format_game(&g);
        assert!(output.starts_with("Away Team @ Home Team"));
        assert!(output.contains("Score: AWY 80 - 90 HME"));
        assert!(output.contains("Winner: Home Team"));
    }

    #[test]
    fn test_format_game_date_plain_date() {
        let mut g = game(None, None);
        g.date = "2024-01-15".to_string();
        let output = format_game(&g);
        assert!(output.contains("Date: January 15, 2024\n"));
    }

    #[test]
    fn test_format_game_date_falls_back_to_raw() {
        let mut g = game(None, None);
        g.date = "sometime soon".to_string();
        let output = format_game(&g);
        assert!(output.contains("Date: sometime soon"));
    }

    #[test]
    fn test_format_alert() {
        let feature = AlertFeature {
            properties: AlertProperties {
                event: "Flood Warning".to_string(),
                area_desc: "Sacramento County".to_string(),
                severity: "Severe".to_string(),
                description: "River levels rising".to_string(),
                instruction: "Move to higher ground".to_string(),
            },
        };
        let output = format_alert(&feature);
        assert_eq!(
            output,
            "Event: Flood Warning\nArea: Sacramento County\nSeverity: Severe\n\
             Description: River levels rising\nInstructions: Move to higher ground"
        );
    }

    #[test]
    fn test_format_forecast_caps_at_five_periods() {
        let periods: Vec<ForecastPeriod> = (0..7)
            .map(|i| ForecastPeriod {
                name: format!("Period {i}"),
                temperature: 60 + i,
                temperature_unit: "F".to_string(),
                wind_speed: "5 mph".to_string(),
                wind_direction: "NW".to_string(),
                detailed_forecast: "Clear".to_string(),
            })
            .collect();
        let output = format_forecast(&periods);
        assert!(output.contains("Period 0:"));
        assert!(output.contains("Period 4:"));
        assert!(!output.contains("Period 5:"));
        assert_eq!(output.matches("---").count(), 4);
    }

    #[test]
    fn test_format_forecast_period_layout() {
        let periods = vec![ForecastPeriod {
            name: "Tonight".to_string(),
            temperature: 55,
            temperature_unit: "F".to_string(),
            wind_speed: "10 mph".to_string(),
            wind_direction: "SW".to_string(),
            detailed_forecast: "Partly cloudy".to_string(),
        }];
        assert_eq!(
            format_forecast(&periods),
            "Tonight:\nTemperature: 55°F\nWind: 10 mph SW\nForecast: Partly cloudy"
        );
    }
}
