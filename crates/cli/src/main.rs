//! Pie Order CLI - offline front end for the order engine.
//!
//! # Usage
//!
//! ```bash
//! # Build one order line
//! pie-cli item --size 14 --variant SCREEN --option P:left-half:extra
//!
//! # Assemble a full order document from a YAML order file
//! pie-cli assemble order.yaml
//!
//! # Resolve an address into its API object and locator lines
//! pie-cli address --street "1 Main St" --city Springfield --region IL --postal-code 62701
//!
//! # Decode collaborator replies saved to disk
//! pie-cli store stores.json
//! pie-cli menu menu.json pizza thin
//! pie-cli reply validate.json
//! ```
//!
//! # Commands
//!
//! - `item` - Build one order line
//! - `assemble` - Assemble an order document for the configured account
//! - `address` - Resolve an address
//! - `store` - Pick the nearest store from a store-locator reply
//! - `menu` - List and search a catalog reply
//! - `reply` - Classify a validate/price/place reply
//!
//! Logs go to stderr. Set `PIE_LOG_JSON` for JSON log lines.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "pie-cli")]
#[command(author, version, about = "Pie order document tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one order line and print it as JSON
    Item {
        /// Size code, e.g. 14
        #[arg(short, long)]
        size: String,

        /// Crust or variant code, e.g. SCREEN
        #[arg(short, long)]
        variant: String,

        /// Quantity (default: 1)
        #[arg(short, long)]
        qty: Option<i64>,

        /// Topping as INGREDIENT[:PLACEMENT[:INTENSITY]], repeatable
        #[arg(short, long = "option")]
        options: Vec<String>,
    },
    /// Assemble an order document from a YAML order file
    Assemble {
        /// Path to the order file
        file: PathBuf,
    },
    /// Resolve an address and print it with its locator lines
    Address {
        /// Street line, e.g. "1 Main St"
        #[arg(long)]
        street: Option<String>,

        /// City name
        #[arg(long)]
        city: Option<String>,

        /// State or province code, e.g. IL
        #[arg(long)]
        region: Option<String>,

        /// Postal or ZIP code
        #[arg(long)]
        postal_code: Option<String>,

        /// Dwelling type (default: House)
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Pick the nearest store from a store-locator reply
    Store {
        /// Path to the reply JSON
        file: PathBuf,
    },
    /// List catalog items whose name contains every query
    Menu {
        /// Path to the catalog reply JSON
        file: PathBuf,
        /// Case-insensitive name fragments
        queries: Vec<String>,
    },
    /// Classify a validate, price or place reply
    Reply {
        /// Path to the reply JSON
        file: PathBuf,
    },
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pie_order=info,pie_cli=info".into());

    let json = std::env::var_os("PIE_LOG_JSON").is_some();
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Item {
            size,
            variant,
            qty,
            options,
        } => commands::item::run(&size, &variant, qty, &options)?,
        Commands::Assemble { file } => commands::assemble::run(&file)?,
        Commands::Address {
            street,
            city,
            region,
            postal_code,
            kind,
        } => commands::address::run(pie_order_core::AddressInput {
            street,
            city,
            region,
            postal_code,
            kind,
            delivery_instructions: None,
        })?,
        Commands::Store { file } => commands::store::run(&file)?,
        Commands::Menu { file, queries } => commands::menu::run(&file, &queries)?,
        Commands::Reply { file } => commands::reply::run(&file)?,
    }
    Ok(())
}
