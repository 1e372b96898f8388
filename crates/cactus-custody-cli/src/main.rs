/*
[INPUT]:  CLI arguments, YAML configuration file, CACTUS_* environment variables
[OUTPUT]: Pretty-printed JSON results of custody API calls
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or output format
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cactus_custody_adapter::CustodyClient;
use cactus_custody_cli::commands::{self, Command};
use cactus_custody_cli::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "cactus-custody", version, about = "Cactus custody API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let output = if args.command == Command::Nonce {
        commands::nonce_output()?
    } else {
        let config = load_config(args.config_path.as_ref())?;
        let credential = config.credential()?;
        info!(
            scheme = credential.scheme(),
            offline = args.command.is_offline(),
            "configuration loaded"
        );
        let client = CustodyClient::new(config.client_config(), credential)
            .context("create custody client")?;
        commands::run(&client, args.command).await?
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("render output")?
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    let mut config = match path {
        Some(path) => CliConfig::from_file(path).context("load config")?,
        None => CliConfig::default(),
    };
    config.apply_env();
    Ok(config)
}
