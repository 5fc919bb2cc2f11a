//! KNX Group Address Converter
//!
//! Reads an ETS group address export and writes a YAML configuration with
//! the addresses grouped into lights, fans, switches and climate devices.
//!
//! ```text
//! knx-ga-converter --input files/GA_240714.csv --output files/knx.yaml
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use knx_ga_converter::{
    ColumnLayout, ConversionReport, Converter, ConverterConfig, CsvOptions, CsvRowSource, Result,
    YamlDocumentSink,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// KNX Group Address Converter - ETS CSV export to YAML device configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ETS group address export (CSV)
    #[arg(short, long, env = "KNX_INPUT", default_value = knx_ga_converter::config::DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// YAML file to write
    #[arg(short, long, env = "KNX_OUTPUT", default_value = knx_ga_converter::config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// CSV field delimiter (single character, "\t" for tab)
    #[arg(long, env = "KNX_DELIMITER", default_value = ",")]
    delimiter: String,

    /// Take description and address from the first two columns instead of header names
    #[arg(long, env = "KNX_POSITIONAL")]
    positional: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

impl Args {
    fn to_config(&self) -> Result<ConverterConfig> {
        let config = ConverterConfig {
            input_path: self.input.clone(),
            output_path: self.output.clone(),
            csv: CsvOptions {
                delimiter: CsvOptions::parse_delimiter(&self.delimiter)?,
                layout: if self.positional {
                    ColumnLayout::Positional
                } else {
                    ColumnLayout::Named
                },
            },
        };
        config.validate()?;
        Ok(config)
    }
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args);

    match run(&args).await {
        Ok(report) => {
            println!("YAML file created successfully.");
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(kind = ?e.kind(), "Conversion failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: &Args) -> Result<ConversionReport> {
    let config = args.to_config()?;

    info!("Starting KNX group address conversion");
    info!("  Version: {}", knx_ga_converter::VERSION);
    info!("  Input: {}", config.input_path.display());
    info!("  Output: {}", config.output_path.display());
    info!("  Column layout: {:?}", config.csv.layout);

    let source = Arc::new(CsvRowSource::new(&config.input_path, config.csv.clone()));
    let sink = Arc::new(YamlDocumentSink::new(&config.output_path));

    let report = Converter::new(source, sink).run().await?;

    info!(
        lights = report.lights,
        fans = report.fans,
        switches = report.switches,
        climate = report.climate,
        "Configuration written"
    );
    Ok(report)
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
