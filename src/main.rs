use alias_shortener::config::{self, Config};
use alias_shortener::server;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    load_env_file()?;

    let config = config::load_from_env().context("Invalid configuration")?;

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

/// Loads `CONFIG_PATH` when set, otherwise an optional `.env`.
fn load_env_file() -> Result<()> {
    match std::env::var("CONFIG_PATH") {
        Ok(path) if !path.is_empty() => {
            dotenvy::from_path(&path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
        }
        _ => {
            dotenvy::dotenv().ok();
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
