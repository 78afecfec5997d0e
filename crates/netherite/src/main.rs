use clap::Parser;
use netherite_bot::{NetheriteBot, Settings};
use netherite_error::NetheriteResult;
use std::path::PathBuf;
use tracing::info;

/// Minecraft-themed Discord chat bot.
#[derive(Debug, Parser)]
#[command(name = "netherite", version, about)]
struct Cli {
    /// Path to a TOML settings file (defaults to ./netherite.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level instead of reading RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> NetheriteResult<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let settings = Settings::load(cli.config.as_deref())?;
    info!(prefix = %settings.prefix, "Settings loaded");

    let mut bot = NetheriteBot::new(settings).await?;
    bot.start().await?;
    Ok(())
}
