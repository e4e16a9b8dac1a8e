//! Sova Home CLI - drive the storefront checkout from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the demo cart
//! sova-cli cart
//!
//! # Check an order form without placing the order
//! sova-cli validate --order order.yaml
//!
//! # Run the full checkout and place the order
//! sova-cli checkout --order order.yaml --cart cart.yaml
//! ```
//!
//! # Commands
//!
//! - `cart` - Print cart lines and totals
//! - `validate` - Validate an order form
//! - `checkout` - Cart → info → confirm → place order
//!
//! Configuration is read from the environment (see [`config`]); flags win.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod files;
mod render;

use commands::checkout::CheckoutOptions;
use config::{CliConfig, LogFormat};
use error::CliError;

#[derive(Parser)]
#[command(name = "sova-cli")]
#[command(author, version, about = "Sova Home checkout tools")]
struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cart lines and totals
    Cart {
        /// Cart file (YAML or JSON); defaults to `SOVA_CART_FILE` or the demo cart
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Validate an order form
    Validate {
        /// Order form file (YAML or JSON)
        #[arg(short, long)]
        order: PathBuf,

        /// Also reject malformed email addresses
        #[arg(long)]
        strict_email: bool,
    },
    /// Run the checkout and place the order
    Checkout {
        /// Order form file (YAML or JSON)
        #[arg(short, long)]
        order: PathBuf,

        /// Cart file; defaults to `SOVA_CART_FILE` or the demo cart
        #[arg(short, long)]
        cart: Option<PathBuf>,

        /// Also reject malformed email addresses
        #[arg(long)]
        strict_email: bool,

        /// Where to send the customer afterwards (overrides `SOVA_EXIT_URL`)
        #[arg(long)]
        exit_url: Option<String>,
    },
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = run(cli, &config, &mut out).await;
    let _ = out.flush();

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli, config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Commands::Cart { file } => {
            let file = file.or_else(|| config.cart_file.clone());
            commands::cart::show(file.as_deref(), cli.json, out)?;
        }
        Commands::Validate {
            order,
            strict_email,
        } => {
            commands::validate::run(&order, strict_email || config.strict_email, cli.json, out)
                .await?;
        }
        Commands::Checkout {
            order,
            cart,
            strict_email,
            exit_url,
        } => {
            let cart = cart.or_else(|| config.cart_file.clone());
            let opts = CheckoutOptions {
                order: &order,
                cart: cart.as_deref(),
                strict_email: strict_email || config.strict_email,
                exit_url: exit_url.as_deref().unwrap_or(&config.exit_url),
                as_json: cli.json,
            };
            commands::checkout::run(opts, out).await?;
        }
    }
    Ok(())
}
