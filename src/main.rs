use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use fr24_probe::{api::FlightProvider, cli::Cli, config::Config, credentials, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Instrumentation and safety
    let _log_guard = logging::initialize_logging(cli.verbose);
    color_eyre::install()?;

    let config = Config::load(&cli.config);

    let api_key = if cli.use_env_key {
        credentials::load_dotenv();
        let key = credentials::api_key_from_env(&config.api.api_key_env)
            .ok_or_else(|| eyre!("{} environment variable not set", config.api.api_key_env))?;
        Some(key)
    } else {
        None
    };

    let query = cli.into_query(config.query.default_limit, api_key);
    let provider = FlightProvider::new(&config.api)?;

    info!("Querying {:?} endpoint", query.tier());
    let envelope = provider.fetch_aircraft(&query).await;

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
