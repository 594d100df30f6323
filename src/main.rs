use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pressure_check::api::ApiServer;
use pressure_check::skill::messages::SKILL_NAME;
use pressure_check::{
    Address, Config, ConditionsLookup, DeviceAddressClient, PressureCheck, Skill, WeatherClient,
};

/// Pressure Check - voice skill reporting the current barometric pressure
#[derive(Parser)]
#[command(name = "pressure-check", version, about)]
struct Cli {
    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the skill endpoint (default)
    Serve,
    /// Look up current conditions for a postal code and print the spoken reading
    Conditions {
        /// Postal code to query
        postal_code: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,pressure_check=info",
        1 => "info,pressure_check=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    tracing::debug!(?config, "loaded configuration");

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Conditions { postal_code } => conditions(&config, &postal_code).await,
    }
}

/// Serve the skill endpoint until interrupted
async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        skill = SKILL_NAME,
        port = config.server.port,
        "starting skill server"
    );

    let weather = WeatherClient::new(
        config.weather_api_key()?.to_string(),
        config.weather.base_url.clone(),
        config.server.http_timeout,
    )?;
    let address = DeviceAddressClient::new(config.server.http_timeout)?;

    if config.skill.application_id.is_none() {
        tracing::warn!("skill application id not configured - accepting requests for any skill");
    }

    let pressure = PressureCheck::new(Arc::new(address), Arc::new(weather));
    let skill = Skill::new(pressure, config.skill.application_id.clone());

    ApiServer::new(skill, config.server.port).run().await?;

    Ok(())
}

/// Print the spoken reading for a postal code
async fn conditions(config: &Config, postal_code: &str) -> anyhow::Result<()> {
    let weather = WeatherClient::new(
        config.weather_api_key()?.to_string(),
        config.weather.base_url.clone(),
        config.server.http_timeout,
    )?;

    let reading = weather.conditions(postal_code).await?;
    let address = Address {
        postal_code: Some(postal_code.to_string()),
        ..Address::default()
    };

    println!("{reading}");
    println!("{}", pressure_check::format_pressure(&address, &reading));

    Ok(())
}
