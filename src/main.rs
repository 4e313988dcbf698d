//! `v6canon` - print the canonical form of IPv6 addresses.
//!
//! Addresses come from the command line, or one per line on stdin when none
//! are given. Results go to stdout; logs and per-address errors go to stderr.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use v6canon::{CanonicalizeConfig, LoggingYamlConfig, V6CanonConfig, expand, process_address};

#[derive(Debug, Parser)]
#[command(name = "v6canon")]
#[command(about = "Canonicalize fully expanded IPv6 addresses (RFC 5952 style)")]
struct App {
    /// Addresses to canonicalize; read from stdin when omitted
    addresses: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the expanded eight-group form instead
    #[arg(long, conflicts_with = "demo")]
    expand: bool,

    /// Run the built-in reference cases
    #[arg(long)]
    demo: bool,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    let app = App::parse();

    let config = match &app.config {
        Some(path) => V6CanonConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => V6CanonConfig::default(),
    };
    init_tracing(&config.logging);

    let cfg = config.canonical.to_canonical_config();

    if app.demo {
        return Ok(run_demo(&cfg));
    }

    let addresses = if app.addresses.is_empty() {
        read_stdin()?
    } else {
        app.addresses.clone()
    };

    let mut failures = 0usize;
    for address in &addresses {
        let ok = if app.expand {
            print_expanded(address, app.format)?
        } else {
            print_canonical(address, &cfg, app.format)?
        };
        if !ok {
            failures += 1;
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(logging: &LoggingYamlConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_stdin() -> Result<Vec<String>> {
    let mut addresses = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading addresses from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            addresses.push(trimmed.to_string());
        }
    }
    Ok(addresses)
}

fn print_canonical(address: &str, cfg: &CanonicalizeConfig, format: OutputFormat) -> Result<bool> {
    match process_address(address, cfg) {
        Ok(addr) => {
            match format {
                OutputFormat::Text => println!("{addr}"),
                OutputFormat::Json => println!("{}", serde_json::to_string(&addr)?),
            }
            Ok(true)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(false)
        }
    }
}

fn print_expanded(address: &str, format: OutputFormat) -> Result<bool> {
    match expand(address) {
        Ok(full) => {
            match format {
                OutputFormat::Text => println!("{full}"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "original": address, "expanded": full })
                ),
            }
            Ok(true)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(false)
        }
    }
}

fn run_demo(cfg: &CanonicalizeConfig) -> ExitCode {
    let outcomes = v6canon::run_demo(cfg);
    for outcome in &outcomes {
        let actual = match &outcome.actual {
            Ok(text) => text.clone(),
            Err(err) => err.to_string(),
        };
        if outcome.passed() {
            println!(
                "Correct! Original: [{}] Expected: [{}] Actual: [{}]",
                outcome.case.input, outcome.case.expected, actual
            );
        } else {
            eprintln!(
                "INCORRECT! Original: [{}] Expected: [{}] Actual: [{}]",
                outcome.case.input, outcome.case.expected, actual
            );
        }
    }

    if outcomes.iter().all(|o| o.passed()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
