//! Car Sales Report CLI Application
//!
//! This is the command-line interface for the car sales summary.
//! It uses the car-sales-core library and adds:
//! - Configuration file loading (TOML)
//! - PDF report rendering
//! - Email delivery of the report

use anyhow::{Context, Result};
use car_sales_core::{
    html_body, load_records, process_data, records_to_table, summarize, text_body,
};
use clap::Parser;
use std::path::PathBuf;

mod config;
mod email;
mod fonts;
mod report;

use config::AppConfig;

/// Car Sales Report - Summarize sales data, render a PDF and email it
#[derive(Parser, Debug)]
#[command(name = "car-sales")]
#[command(about = "Summarize car sales data into a PDF report and email it", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the JSON sales data (default: car_sales.json)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output path for the PDF report (default: /tmp/cars.pdf)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Email recipient (default: <$USER>@example.com)
    #[arg(long, value_name = "ADDRESS")]
    to: Option<String>,

    /// Accept this digit-group separator in prices, e.g. ','
    #[arg(long, value_name = "CHAR")]
    thousands_separator: Option<char>,

    /// Do not render the PDF report (also disables email)
    #[arg(long)]
    no_report: bool,

    /// Do not send the email
    #[arg(long)]
    no_email: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Car Sales Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using core library v{}", car_sales_core::VERSION);

    let config = resolve_config(&args)?;
    run(&config)
}

/// Load the config file (if any) and apply command line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(input) = &args.input {
        config.input.path = input.clone();
    }
    if let Some(output) = &args.output {
        config.report.output = output.clone();
    }
    if let Some(to) = &args.to {
        config.email.to = Some(to.clone());
    }
    if let Some(separator) = args.thousands_separator {
        config.parsing = config.parsing.with_thousands_separator(separator);
    }
    if args.no_report {
        config.report.enabled = false;
    }
    if args.no_email {
        config.email.enabled = false;
    }

    Ok(config)
}

/// Load, summarize, report, email
fn run(config: &AppConfig) -> Result<()> {
    let records = load_records(&config.input.path)
        .with_context(|| format!("Failed to load sales data from {:?}", config.input.path))?;

    let result = process_data(&records, &config.parsing).context("Failed to summarize sales data")?;
    let summary = summarize(&result);
    for line in &summary {
        println!("{}", line);
    }

    if !config.report.enabled {
        log::info!("Report disabled; skipping PDF and email");
        return Ok(());
    }

    let table = records_to_table(&records);
    report::generate(
        &config.report.output,
        &config.report.title,
        &html_body(&summary),
        &table,
        config.report.fonts_dir.as_deref(),
    )?;
    log::info!("Report written to {:?}", config.report.output);

    if !config.email.enabled {
        log::info!("Email disabled; not sending");
        return Ok(());
    }

    let recipient = config.email.recipient();
    let message = email::generate(
        &config.email.from,
        &recipient,
        &config.email.subject,
        &text_body(&summary),
        &config.report.output,
    )?;
    email::send(&message, &config.email.smtp)?;
    log::info!("Report emailed to {}", recipient);

    Ok(())
}

/// Log level for the `-v`/`-q` flags; quiet wins over verbose
fn log_level(verbose: u8, quiet: bool) -> log::LevelFilter {
    use log::LevelFilter;

    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Set up env_logger at the flag level; `RUST_LOG` directives refine it per module
fn init_logging(verbose: u8, quiet: bool) {
    use std::io::Write;

    env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(buf, "[{:<5} {}] {}", record.level(), record.target(), record.args())
        })
        .init();
}
