//! Sports operations: today's games, games by date, team schedules, and
//! standings derived from a season's completed games.
//!
//! Every operation validates its inputs before any network call, fetches
//! sequentially, and converts any failure into a plain-language message at
//! the point of detection. Nothing here ever returns an error to the host.

use chrono::{Datelike, Local, NaiveDate};
use reqwest::Client;
use tracing::warn;

use crate::config::Config;
use crate::constants::display::{SCHEDULE_GAME_LIMIT, STANDINGS_RULE_WIDTH};
use crate::data_fetcher::client::fetch;
use crate::data_fetcher::models::{Game, PaginatedData, Team};
use crate::data_fetcher::urls;
use crate::render::format_game;
use crate::resolver::resolve_team;
use crate::standings::{StandingsRow, aggregate};

/// Returns NBA games scheduled for today, with scores where available.
pub async fn get_today_games(client: &Client, config: &Config) -> String {
    let today = Local::now().date_naive();
    let url = urls::games_by_date_url(&config.sports_api_base, &today.format("%Y-%m-%d").to_string());

    let games = match fetch::<PaginatedData<Game>>(client, &url, &[]).await {
        Ok(response) => response.data,
        Err(e) => {
            warn!("Today's games fetch failed: {e}");
            return "Error: Unable to fetch today's NBA games. The API may be temporarily \
                    unavailable."
                .to_string();
        }
    };

    let display_date = today.format("%B %d, %Y");
    if games.is_empty() {
        return format!("No NBA games scheduled for today ({display_date}).");
    }

    let formatted: Vec<String> = games.iter().map(format_game).collect();
    format!(
        "NBA Games for {display_date}:\n\n{}",
        formatted.join("\n---\n")
    )
}

/// Returns NBA games for a specific date.
///
/// The date must be a valid calendar date in YYYY-MM-DD form; anything
/// else is rejected before any network call.
pub async fn get_games_by_date(client: &Client, config: &Config, date: &str) -> String {
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return format!(
            "Error: Invalid date format '{date}'. Please use YYYY-MM-DD format \
             (e.g., 2024-01-15)."
        );
    }

    let url = urls::games_by_date_url(&config.sports_api_base, date);
    let games = match fetch::<PaginatedData<Game>>(client, &url, &[]).await {
        Ok(response) => response.data,
        Err(e) => {
            warn!("Games fetch for {date} failed: {e}");
            return format!(
                "Error: Unable to fetch NBA games for {date}. The API may be temporarily \
                 unavailable."
            );
        }
    };

    if games.is_empty() {
        return format!("No NBA games scheduled for {date}.");
    }

    let formatted: Vec<String> = games.iter().map(format_game).collect();
    format!("NBA Games for {date}:\n\n{}", formatted.join("\n---\n"))
}

/// Returns the schedule for a team resolved from a free-text query.
///
/// The team list is fetched first and the query resolved against it; only
/// then are that team's games fetched, so the second call never starts
/// before the first completes. The season defaults to the current
/// calendar year.
pub async fn get_team_schedule(
    client: &Client,
    config: &Config,
    team_name: &str,
    season: Option<i32>,
) -> String {
    let teams_url = urls::teams_url(&config.sports_api_base);
    let teams = match fetch::<PaginatedData<Team>>(client, &teams_url, &[]).await {
        Ok(response) => response.data,
        Err(e) => {
            warn!("Team list fetch failed: {e}");
            return "Error: Unable to fetch team information. The API may be temporarily \
                    unavailable."
                .to_string();
        }
    };

    let Some(team) = resolve_team(team_name, &teams) else {
        return format!(
            "Error: Team '{team_name}' not found. Please use a team name, city, or \
             abbreviation (e.g., 'Lakers', 'LAL', 'Los Angeles Lakers')."
        );
    };
    let team_full_name = team.full_name.clone();

    let season = season.unwrap_or_else(|| Local::now().year());
    let games_url = urls::team_games_url(&config.sports_api_base, team.id, season);
    let mut games = match fetch::<PaginatedData<Game>>(client, &games_url, &[]).await {
        Ok(response) => response.data,
        Err(e) => {
            warn!("Schedule fetch for {team_full_name} failed: {e}");
            return format!(
                "Error: Unable to fetch schedule for {team_full_name}. The API may be \
                 temporarily unavailable."
            );
        }
    };

    if games.is_empty() {
        return format!("No games found for {team_full_name} in the {season} season.");
    }

    games.sort_by(|a, b| a.date.cmp(&b.date));

    let formatted: Vec<String> = games
        .iter()
        .take(SCHEDULE_GAME_LIMIT)
        .map(format_game)
        .collect();
    let remaining = games.len().saturating_sub(SCHEDULE_GAME_LIMIT);

    let mut result = format!(
        "{team_full_name} Schedule ({season} season):\n\n{}",
        formatted.join("\n---\n")
    );
    if remaining > 0 {
        result.push_str(&format!("\n\n... and {remaining} more games."));
    }
    result
}

/// Returns standings for a season, derived from its completed games.
///
/// The team list and the season's games are fetched one after another;
/// if either fetch fails the operation reports that stage and stops, no
/// partial standings are produced.
pub async fn get_standings(client: &Client, config: &Config, season: Option<i32>) -> String {
    let season = season.unwrap_or_else(|| Local::now().year());

    let teams_url = urls::teams_url(&config.sports_api_base);
    let teams = match fetch::<PaginatedData<Team>>(client, &teams_url, &[]).await {
        Ok(response) => response.data,
        Err(e) => {
            warn!("Team list fetch failed: {e}");
            return "Error: Unable to fetch team information. The API may be temporarily \
                    unavailable."
                .to_string();
        }
    };

    let games_url = urls::season_games_url(&config.sports_api_base, season);
    let games = match fetch::<PaginatedData<Game>>(client, &games_url, &[]).await {
        Ok(response) => response.data,
        Err(e) => {
            warn!("Season games fetch for {season} failed: {e}");
            return format!(
                "Error: Unable to fetch games for {season} season. The API may be temporarily \
                 unavailable."
            );
        }
    };

    let standings = aggregate(&teams, &games);

    let mut result = format!("NBA Standings - {season} Season\n\n");
    result.push_str("EASTERN CONFERENCE\n");
    result.push_str(&"-".repeat(STANDINGS_RULE_WIDTH));
    result.push('\n');
    push_rows(&mut result, &standings.east);

    result.push_str("\nWESTERN CONFERENCE\n");
    result.push_str(&"-".repeat(STANDINGS_RULE_WIDTH));
    result.push('\n');
    push_rows(&mut result, &standings.west);

    result.trim_end().to_string()
}

fn push_rows(result: &mut String, rows: &[StandingsRow]) {
    for (rank, row) in rows.iter().enumerate() {
        result.push_str(&format!(
            "{}. {}: {}-{} ({:.1}%)\n",
            rank + 1,
            row.name,
            row.wins,
            row.losses,
            row.win_pct
        ));
    }
}
