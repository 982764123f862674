//! Headless driver for the configurator.
//!
//! Loads a catalog, then reads one JSON command per line from stdin and
//! writes one JSON event per line to stdout. Logs go to stderr.
//!
//! ```text
//! $ combostat --catalog parts.json <<EOF
//! {"command": "select", "category": "blade", "id": 1}
//! {"command": "commit"}
//! EOF
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use combostat::{Catalog, Command, Configurator, ConfiguratorConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "combostat", version, about = "Drive a combination configurator from JSON commands")]
struct Args {
    /// Part catalog (JSON with `blades`, `ratchets` and `bits`).
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Settings file (bar ceilings, chart palette, default catalog).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the comparison entries as JSON once input ends.
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => ConfiguratorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfiguratorConfig::default(),
    };

    let catalog_path = args
        .catalog
        .clone()
        .or_else(|| config.catalog_path.clone())
        .context("no catalog given; pass --catalog or set catalog_path in the config")?;
    let catalog = Catalog::load(&catalog_path)
        .with_context(|| format!("failed to load parts catalog {}", catalog_path.display()))?;

    let mut configurator = Configurator::new(catalog, config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match serde_json::from_str::<Command>(&line) {
            Ok(command) => match configurator.apply(command) {
                Ok(event) => serde_json::to_value(&event)?,
                Err(e) => {
                    warn!(line = lineno + 1, "command rejected: {}", e);
                    serde_json::json!({ "error": e.to_string() })
                }
            },
            Err(e) => {
                warn!(line = lineno + 1, "unparseable command: {}", e);
                serde_json::json!({ "error": format!("invalid command: {}", e) })
            }
        };
        writeln!(out, "{}", reply)?;
    }

    if args.summary {
        writeln!(out, "{}", serde_json::to_string(configurator.list_entries())?)?;
    }
    info!(entries = configurator.list_entries().len(), "input finished");
    Ok(())
}
