//! Montant CLI
//!
//! Usage:
//!   montant convert 250.5 1000      - Spell the given amounts
//!   montant convert 12,345 --json   - One JSON object per amount
//!   montant stdin < amounts.txt     - Spell one amount per line

mod cli;
mod render;

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use montant_shared::{AppConfig, AppError, LoggingConfig};

use cli::{Cli, Commands};
use render::{Renderer, render_all};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Tracing is not set up yet; report straight to stderr.
    let config = match AppConfig::load().map_err(AppError::from) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(err.exit_code());
        }
    };
    init_tracing(&config.logging);

    let renderer = Renderer::from_config(&config.cache);
    let mut stdout = io::stdout().lock();

    let (result, output) = match cli.command {
        Commands::Convert(args) => (
            render_all(
                &renderer,
                &args.amounts,
                args.output.json,
                args.output.strict,
                &mut stdout,
            ),
            args.output,
        ),
        Commands::Stdin(output) => {
            let lines = io::stdin()
                .lock()
                .lines()
                .collect::<Result<Vec<_>, _>>()
                .context("Failed to read stdin")?;
            (
                render_all(&renderer, &lines, output.json, output.strict, &mut stdout),
                output,
            )
        }
    };

    match result {
        Ok(blanks) => {
            info!(blanks, strict = output.strict, "Amounts rendered");
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), error = %err, "Rendering stopped");
            drop(stdout);
            std::process::exit(err.exit_code());
        }
    }
}

/// Initializes tracing on stderr so stdout only carries rendered amounts.
fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}
