//! Pricing command line tool
//!
//! Quotes requests stored as JSON or YAML files without running the service

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use janitor_pricing::config::{LoggingConfig, load_document};
use janitor_pricing::services::pricing::{
    PricingBreakdown, calculate_detailed_pricing, format_currency, format_percentage,
};
use janitor_pricing::utils::logging::init_logging;
use janitor_pricing::{PricingEngine, PricingRequest, PricingSettings, ServiceType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pricing-tool", version, about = "Quote janitorial services from the command line")]
struct Cli {
    /// Log level (RUST_LOG takes precedence)
    #[arg(long, env = "PRICING_LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a request file and print the breakdown
    Quote {
        /// Request file (JSON or YAML)
        #[arg(short, long)]
        request: PathBuf,
        /// Settings file (JSON or YAML); defaults are used when omitted
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Currency for display
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Quick estimate without complexity, fees or labor
    Estimate {
        /// Service type
        #[arg(long)]
        service_type: ServiceType,
        /// Square feet, or number of windows for window service
        #[arg(long)]
        size: f64,
        /// Service frequency
        #[arg(long, default_value = "one-time")]
        frequency: String,
        /// Settings file (JSON or YAML)
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Currency for display
        #[arg(long, default_value = "USD")]
        currency: String,
    },

    /// Legacy detailed pricing with labor folded into the subtotal
    Detailed {
        /// Square feet
        #[arg(long)]
        size: f64,
        /// Service frequency
        #[arg(long, default_value = "one-time")]
        frequency: String,
        /// Settings file (JSON or YAML)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },

    /// Print the default settings as YAML
    Defaults,
}

fn load_settings(path: Option<&PathBuf>) -> Result<PricingSettings> {
    match path {
        Some(path) => load_document(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(PricingSettings::default()),
    }
}

fn print_breakdown(breakdown: &PricingBreakdown, settings: &PricingSettings, currency: &str) {
    let money = |amount: f64| format_currency(amount, currency);
    let details = &breakdown.calculation_details;

    println!(
        "Base price:          {} ({} {} at {})",
        money(breakdown.base_price),
        details.units,
        details.unit_type,
        money(details.base_rate)
    );
    println!("Complexity factor:   {}", breakdown.complexity_factor);
    println!("Frequency:           x{}", breakdown.frequency_multiplier);
    for (name, amount) in &breakdown.adjustments.items {
        println!("  {:<18} {}", name, money(*amount));
    }
    println!("Subtotal:            {}", money(breakdown.subtotal));
    println!(
        "Overhead ({}):     {}",
        format_percentage(settings.overhead_percentage),
        money(breakdown.overhead_amount)
    );
    println!(
        "Margin ({}):       {}",
        format_percentage(settings.margin_percentage),
        money(breakdown.margin_amount)
    );
    println!("Total:               {}", money(breakdown.total));
    println!(
        "Labor estimate:      {} h ({})",
        breakdown.labor_hours,
        money(breakdown.labor_cost)
    );
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        ..Default::default()
    });

    match cli.command {
        Commands::Quote {
            request,
            settings,
            currency,
            json,
        } => {
            let settings = load_settings(settings.as_ref())?;
            let pricing_request: PricingRequest = load_document(&request)
                .with_context(|| format!("Failed to load request from {}", request.display()))?;

            let engine = PricingEngine::new(Some(settings))?;
            let breakdown = engine.calculate_pricing(&pricing_request);

            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                print_breakdown(&breakdown, engine.settings(), &currency);
            }
        }
        Commands::Estimate {
            service_type,
            size,
            frequency,
            settings,
            currency,
        } => {
            let engine = PricingEngine::new(Some(load_settings(settings.as_ref())?))?;
            let estimate = engine.get_quick_estimate(service_type, size, &frequency);
            println!("{}", format_currency(estimate, &currency));
        }
        Commands::Detailed {
            size,
            frequency,
            settings,
        } => {
            let settings = load_settings(settings.as_ref())?;
            let result = calculate_detailed_pricing(size, &frequency, &settings);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Defaults => {
            print!("{}", serde_yaml::to_string(&PricingSettings::default())?);
        }
    }

    Ok(())
}
