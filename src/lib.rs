//! NBA scores, standings and US weather as plain text
//!
//! This library fetches public sports and weather data from two
//! independent services, normalizes it into typed records, and renders
//! it as human-readable text blocks. Each of the six operations performs
//! its fetches sequentially, holds no state across invocations, and
//! always returns displayable text rather than an error.
//!
//! # Examples
//!
//! ```rust,no_run
//! use courtcast::config::Config;
//! use courtcast::data_fetcher::client::build_client;
//! use courtcast::error::AppError;
//! use courtcast::operations::get_games_by_date;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = build_client(config.http_timeout_seconds)?;
//!
//!     let report = get_games_by_date(&client, &config, "2024-01-15").await;
//!     println!("{report}");
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod operations;
pub mod render;
pub mod resolver;
pub mod standings;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::client::{build_client, fetch};
pub use data_fetcher::models::{AlertFeature, ForecastPeriod, Game, Team};
pub use error::AppError;
pub use operations::{
    get_alerts, get_forecast, get_games_by_date, get_standings, get_team_schedule,
    get_today_games,
};
pub use resolver::resolve_team;
pub use standings::{Standings, StandingsRow, aggregate};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
