//! Vehicle Property Observer CLI
//!
//! Command-line front end for the vhal-props library. It replays a recorded
//! vehicle property log, prints every reading in human-readable form (with a
//! dedicated readout for the EV instantaneous charge rate) and finishes with
//! a table of the last value seen per property - the replay counterpart of
//! the original in-vehicle observer screen.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use vhal_props::{beautify, readable_milliwatts, registry, JsonlFeed};

mod config;
mod table;

use config::OutputFormat;

/// Vehicle Property Observer - replay and format recorded property logs
#[derive(Parser, Debug)]
#[command(name = "vhal-props-cli")]
#[command(about = "Replay recorded vehicle property logs as readable values", long_about = None)]
#[command(version)]
struct Args {
    /// Path to recorded property log (JSON lines) to replay
    #[arg(short, long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Output file for the final property table (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only replay these property identifiers (can be repeated)
    #[arg(long = "property", value_name = "ID")]
    properties: Vec<i32>,

    /// Maximum number of readings to replay (for testing)
    #[arg(long, value_name = "COUNT")]
    max_events: Option<usize>,

    /// Skip the final property table
    #[arg(long)]
    no_table: bool,

    /// Emit the final table as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Settings for one replay run, merged from CLI flags or config.toml
struct ReplayOptions {
    property_filter: Option<Vec<i32>>,
    max_events: Option<usize>,
    table: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Vehicle Property Observer CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using property library v{}", vhal_props::VERSION);

    if let Some(log_path) = &args.log {
        // Flag mode - replay a single log with CLI options
        let options = ReplayOptions {
            property_filter: if args.properties.is_empty() {
                None
            } else {
                Some(args.properties.clone())
            },
            max_events: args.max_events,
            table: !args.no_table,
            format: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Txt
            },
            output: args.output.clone(),
        };
        replay(log_path, &options)?;
    } else if let Some(config_path) = &args.config {
        // Config mode - settings come from config.toml
        log::info!("Loading configuration from: {:?}", config_path);
        let config = config::load_config(config_path)?;
        let options = ReplayOptions {
            property_filter: config.filtering.property_ids,
            max_events: args.max_events,
            table: config.output.table,
            format: config.output.format,
            output: args.output.clone(),
        };
        replay(&config.input.log_file, &options)?;
    } else {
        // No arguments - show quick start
        println!("Vehicle Property Observer - No input specified");
        println!("\nQuick Start:");
        println!("  vhal-props-cli --log drive.jsonl");
        println!("  vhal-props-cli --log drive.jsonl --property 289408001 --property 289408009");
        println!("\nFor settings in a file:");
        println!("  vhal-props-cli --config config.toml");
        println!("\nUse --help for more options");
    }

    Ok(())
}

/// Replay a recorded property log and render the results
fn replay(log_path: &Path, options: &ReplayOptions) -> Result<()> {
    println!("═══════════════════════════════════════════════");
    println!("  Vehicle Property Observer - Replay");
    println!("═══════════════════════════════════════════════\n");

    let feed = JsonlFeed::open(log_path)
        .with_context(|| format!("Failed to open property log: {:?}", log_path))?;

    // Last formatted value per property, for the final table
    let mut last_values: BTreeMap<i32, String> = BTreeMap::new();
    let mut num_readings = 0usize;
    let mut num_errors = 0usize;

    for item in feed {
        if let Some(max) = options.max_events {
            if num_readings >= max {
                log::info!("Reached max event count ({}), stopping replay", max);
                break;
            }
        }

        let reading = match item {
            Ok(reading) => reading,
            Err(e) => {
                // Feed errors are logged and counted, never fatal
                log::warn!("Property feed error: {}", e);
                num_errors += 1;
                continue;
            }
        };

        if let Some(filter) = &options.property_filter {
            if !filter.contains(&reading.property_id) {
                continue;
            }
        }
        num_readings += 1;

        let formatted = match beautify(reading.property_id, &reading.value) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Formatting error: {}", e);
                num_errors += 1;
                reading.value.to_string()
            }
        };

        let name = registry::property_name(reading.property_id).unwrap_or("-");
        println!("{:>10}  {:<40}  {}", reading.property_id, name, formatted);

        // The charge rate gets its dedicated readout next to the raw value
        if reading.property_id == registry::EV_BATTERY_INSTANTANEOUS_CHARGE_RATE {
            if let Some(raw) = reading.value.as_f32() {
                println!(
                    "{:>10}  {:<40}  {} (raw: {})",
                    "", "└ charge rate", readable_milliwatts(raw), raw
                );
            }
        }

        last_values.insert(reading.property_id, formatted);
    }

    println!("\nReplayed {} readings ({} errors)", num_readings, num_errors);

    if options.table && !last_values.is_empty() {
        let rendered = match options.format {
            OutputFormat::Txt => {
                let mut text = format!(
                    "\nProperty table ({} properties, generated {})\n\n",
                    last_values.len(),
                    Utc::now().to_rfc3339()
                );
                text.push_str(&table::render_txt(&last_values));
                text
            }
            OutputFormat::Json => table::render_json(&last_values)?,
        };

        match &options.output {
            Some(path) => {
                std::fs::write(path, &rendered)
                    .with_context(|| format!("Failed to write table to {:?}", path))?;
                println!("Property table written to {:?}", path);
            }
            None => println!("{}", rendered),
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
