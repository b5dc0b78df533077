//! Data acquisition layer: HTTP fetch wrapper, upstream models, URL builders

pub mod client;
pub mod models;
pub mod urls;

pub use client::{build_client, fetch};
pub use models::{
    AlertFeature, AlertsResponse, ForecastPeriod, ForecastResponse, Game, PaginatedData,
    PointsResponse, Team,
};
