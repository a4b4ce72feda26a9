use anyhow::Result;
use clap::Parser;

use backend_bootstrap::{cli, init_logging, AppContext, Cli, Command};
use backend_infrastructure::{AppConfig, CONFIG_ENV};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    if let Some(config) = &args.config {
        std::env::set_var(CONFIG_ENV, config);
    }

    let config = AppConfig::load().await?;
    let _guard = init_logging(&config)?;

    let context = AppContext::from_config(config).await?;
    cli::run(context, args.command.unwrap_or(Command::Serve)).await
}
