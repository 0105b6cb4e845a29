mod companies;
mod company;
mod compare;
mod health;
mod matrix;
mod movers;
mod predict;
mod series;
mod status;
mod summary;
mod train;

use quotedeck_core::{ApiConfig, DashboardClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let client = match &cli.api_url {
        Some(url) => DashboardClient::new(
            ApiConfig::with_base_url(url),
            std::sync::Arc::new(quotedeck_core::ReqwestTransport::new()),
        ),
        None => DashboardClient::from_env(),
    };

    match &cli.command {
        Command::Companies => companies::run(&client, cli.json).await,
        Command::Company(args) => company::run(&client, args, cli.json).await,
        Command::Series(args) => series::run(&client, args, cli.json).await,
        Command::Summary(args) => summary::run(&client, args, cli.json).await,
        Command::Compare(args) => compare::run(&client, args, cli.json).await,
        Command::Matrix => matrix::run(&client, cli.json).await,
        Command::Movers => movers::run(&client, cli.json).await,
        Command::Predict(args) => predict::run(&client, args, cli.json).await,
        Command::Train => train::run(&client).await,
        Command::Status(args) => status::run(&client, args).await,
        Command::Health => health::run(&client, cli.json).await,
    }
}

/// Dump a payload as pretty JSON for `--json` mode.
pub fn emit_json<T: serde::Serialize>(payload: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}
