//! `valuekit` command-line driver.
//!
//! Exercises the value primitives through small domain scenarios and prints
//! a JSON report for each command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use valuekit::exit_codes;
use valuekit::io::config::{DEFAULT_CONFIG_PATH, load_config};
use valuekit::logging;
use valuekit::report::{messages_report, priority_report, record_report};

#[derive(Parser)]
#[command(
    name = "valuekit",
    version,
    about = "Value records, clamped properties, and lazy caches"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a product and an order line, copy both, and compare.
    Record {
        #[arg(long, default_value = "baseball")]
        name: String,
        #[arg(long, default_value_t = 10.0)]
        price: f64,
        /// Price for the copied product.
        #[arg(long, default_value_t = 12.0)]
        discounted: f64,
        #[arg(long, default_value_t = 5)]
        quantity: i64,
    },
    /// Write each value to a task priority and report what was stored.
    Priority {
        #[arg(long, default_value = "task")]
        task: String,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Read a customer's lazily loaded messages several times.
    Messages {
        #[arg(long, default_value_t = 2)]
        reads: u32,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Record {
            name,
            price,
            discounted,
            quantity,
        } => {
            let report = record_report(&name, price, discounted, quantity)?;
            print_json(&report)?;
            Ok(exit_codes::OK)
        }
        Command::Priority { task, values } => {
            let cfg = load_config(&cli.config)?;
            let report = priority_report(&cfg, &task, &values)?;
            print_json(&report)?;
            if report.any_clamped() {
                Ok(exit_codes::CLAMPED)
            } else {
                Ok(exit_codes::OK)
            }
        }
        Command::Messages { reads } => {
            let cfg = load_config(&cli.config)?;
            let report = messages_report(&cfg, reads)?;
            print_json(&report)?;
            Ok(exit_codes::OK)
        }
    }
}

/// Print `value` as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{}", payload);
    Ok(())
}
