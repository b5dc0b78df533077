use clap::Parser;
use courtcast::cli::{Args, Command};
use courtcast::config::Config;
use courtcast::data_fetcher::client::build_client;
use courtcast::error::AppError;
use courtcast::logging::setup_logging;
use courtcast::operations;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must stay alive until exit so file logs are flushed
    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logging to {log_file_path}");

    let config = Config::load().await?;
    let client = build_client(config.http_timeout_seconds)?;

    let output = match args.command {
        Command::Today => operations::get_today_games(&client, &config).await,
        Command::Date { date } => operations::get_games_by_date(&client, &config, &date).await,
        Command::Schedule { team, season } => {
            operations::get_team_schedule(&client, &config, &team, season).await
        }
        Command::Standings { season } => {
            operations::get_standings(&client, &config, season).await
        }
        Command::Alerts { state } => operations::get_alerts(&client, &config, &state).await,
        Command::Forecast {
            latitude,
            longitude,
        } => operations::get_forecast(&client, &config, latitude, longitude).await,
    };

    println!("{output}");
    Ok(())
}
