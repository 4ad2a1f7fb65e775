use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use backend_infrastructure::{config_path, AppConfig, CONFIG_ENV};

#[derive(Parser, Debug)]
#[command(name = "skillscape-backend")]
#[command(about = "Skillscape player stats backend", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Write the stats document once and exit
    Refresh {
        /// Account to refresh instead of `refresh_account`
        #[arg(short, long)]
        account: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var(CONFIG_ENV, config);
    }

    let config = AppConfig::load().await?;
    let _log_guard = backend_bootstrap::init_logging(&config.log_format, config.log_dir.as_deref())?;
    let path = config_path();
    info!(path = %path.display(), found = path.exists(), "configuration loaded");

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => backend_bootstrap::run_standalone(config).await,
        Command::Refresh { account } => backend_bootstrap::run_refresh_once(config, account).await,
    }
}
