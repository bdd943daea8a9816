use anyhow::Result;
use clap::Parser;
use incident_relay::config::proc_validator;
use incident_relay::relay::Relay;
use incident_relay::server;
use incident_relay::utils::config_loader;
use incident_relay::utils::constants::DEFAULT_CONFIG_PATH;
use incident_relay::utils::logging::{self, LogLevel};
use reqwest::Client;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read env (.env first, then CLI)
    // -------------------------------

    let _ = dotenvy::dotenv();
    let args = Args::parse();

    // -------------------------------
    // 2. Load config
    // -------------------------------

    let service_config = config_loader::run(&args.config).await?;
    logging::run(&service_config, args.log_level);
    proc_validator::report_service_config(&service_config).await?;
    info!("watsonx: {:?}", service_config.watsonx);

    // -------------------------------
    // 3. Build relay with its own request client
    // -------------------------------

    let relay = Relay::new(service_config.watsonx.clone(), Client::new());

    // -------------------------------
    // 4. Serve
    // -------------------------------

    info!("Service starting...");
    server::server::start(&service_config.settings, relay).await
}
