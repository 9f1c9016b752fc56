//! janitor-pricing - HTTP pricing service
//!
//! Serves the pricing engine over a small JSON API

#![allow(missing_docs)]

use clap::Parser;
use janitor_pricing::server::{self, builder::DEFAULT_CONFIG_PATH};
use janitor_pricing::utils::logging::{bootstrap_logging, init_logging};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pricing-server", version, about = "Janitorial pricing service")]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "PRICING_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Config loading logs through a default subscriber until the
    // configured one is installed
    let loaded = {
        let _bootstrap = bootstrap_logging();
        server::builder::load_config(&args.config).await
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.logging());

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
