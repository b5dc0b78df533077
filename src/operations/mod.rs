//! The externally callable operations.
//!
//! Each orchestrates a handful of sequential fetches plus pure
//! formatting, resolving, or aggregating, and terminates in exactly one
//! displayable text block. The contract with the calling host is:
//! always returns text, never raises.

pub mod sports;
pub mod weather;

pub use sports::{get_games_by_date, get_standings, get_team_schedule, get_today_games};
pub use weather::{get_alerts, get_forecast};
