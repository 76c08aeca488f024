//! # visiocorp-render
//!
//! Static export of the landing page.
//!
//! ```bash
//! # Stock page to stdout
//! visiocorp-render
//!
//! # Config file plus overrides, written to disk
//! visiocorp-render --config page.toml --set heroTitle="Seek insight." -o index.html
//!
//! # Property panel schema for the host
//! visiocorp-render --properties
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use visiocorp_page::config::{LandingConfig, parse_override};
use visiocorp_page::properties::properties_json;
use visiocorp_page::{render_fragment, render_page};

#[derive(Parser, Debug)]
#[command(name = "visiocorp-render")]
#[command(about = "Render the VisioCorp landing page to static HTML")]
#[command(version)]
struct Args {
    /// JSON or TOML file with property values (`.toml` selects TOML)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Property override, e.g. `heroTitle=Seek insight.` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Emit only the page markup, without <html>/<head>
    #[arg(long)]
    fragment: bool,

    /// Print the host property schema as JSON and exit
    #[arg(long)]
    properties: bool,

    /// Write output here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn build_config(args: &Args) -> Result<LandingConfig> {
    let base = match &args.config {
        Some(path) => LandingConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LandingConfig::default(),
    };

    let overrides = args
        .overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = overrides.len(), "applying command-line overrides");

    Ok(base.with_overrides(overrides)?)
}

fn run(args: Args) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let output = if args.properties {
        let schema = properties_json();
        serde_json::to_string_pretty(&schema).context("serializing property schema")?
    } else {
        let config = build_config(&args)?;
        if args.fragment {
            render_fragment(&config)
        } else {
            render_page(&config)
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = output.len(), "page written");
        }
        None => println!("{output}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
