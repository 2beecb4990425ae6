//! CLI command implementations.
//!
//! Results go to stdout, logs to stderr.

pub mod address;
pub mod assemble;
pub mod item;
pub mod menu;
pub mod reply;
pub mod store;

use std::io::Write;
use std::path::Path;

use pie_order_core::OrderError;
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors a command can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid order file: {0}")]
    OrderFile(#[from] serde_yaml::Error),
    #[error("Order file asks for a card payment but no card is configured")]
    NoCard,
    #[error("Cannot render JSON: {0}")]
    Render(#[from] serde_json::Error),
    #[error("Cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Read a whole input file.
fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Print `value` as pretty JSON on stdout.
fn print_json(value: &impl Serialize) -> Result<(), CommandError> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(std::io::stdout().lock(), "{rendered}")?;
    Ok(())
}
