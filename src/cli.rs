use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NBA scores, standings and US weather as plain text
///
/// Runs one lookup per invocation and prints the result to stdout;
/// everything is fetched fresh from the upstream services on each run.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug mode, which also echoes logs to the console.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs are written
    /// to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show NBA games scheduled for today
    Today,
    /// Show NBA games for a specific date
    Date {
        /// Date in YYYY-MM-DD format (e.g. 2024-01-15)
        date: String,
    },
    /// Show the schedule for an NBA team
    Schedule {
        /// Team name, city, or abbreviation (e.g. "Lakers", "LAL")
        team: String,
        /// Season year (e.g. 2023 for the 2023-24 season); defaults to the current year
        #[arg(long)]
        season: Option<i32>,
    },
    /// Show NBA standings derived from a season's completed games
    Standings {
        /// Season year; defaults to the current year
        #[arg(long)]
        season: Option<i32>,
    },
    /// Show active weather alerts for a US state
    Alerts {
        /// Two-letter US state code (e.g. CA, NY)
        state: String,
    },
    /// Show the weather forecast for a location inside the continental US
    Forecast {
        /// Latitude of the location
        latitude: f64,
        /// Longitude of the location
        longitude: f64,
    },
}
