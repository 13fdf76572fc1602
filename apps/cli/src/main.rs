//! Command line validation of occurrence search parameters.
//!
//! ```bash
//! lichen validate YEAR 1991 "1860, 1911" 1991-01-31
//! lichen range "2000-02,2001" --as date
//! lichen interval "2000-01-01T10:00+02:00/2000-01-01T12:00Z" --strip-offset non-utc
//! lichen params --json
//! ```

mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lichen_validator::{
    parse_date_range, parse_decimal_range, parse_integer_range, IsoDateInterval, OffsetMode,
    TypeValidator,
};
use serde_json::json;
use tracing::info;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "lichen")]
#[command(version)]
#[command(about = "Validate occurrence search parameter values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./lichen.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print one JSON object per line
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate values for a search parameter
    Validate {
        /// Parameter name, e.g. YEAR or decimalLatitude
        parameter: String,

        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Parse a `lower,upper` range and print its bounds
    Range {
        value: String,

        #[arg(long = "as", value_enum, default_value = "decimal")]
        kind: RangeKind,
    },

    /// Parse an ISO 8601 interval and render it again
    Interval {
        text: String,

        #[arg(long, value_enum)]
        strip_offset: Option<StripOffset>,
    },

    /// List the known search parameters and their types
    Params,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RangeKind {
    Decimal,
    Integer,
    Date,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StripOffset {
    NonUtc,
    All,
}

fn offset_mode(strip: Option<StripOffset>) -> OffsetMode {
    match strip {
        None => OffsetMode::Keep,
        Some(StripOffset::NonUtc) => OffsetMode::StripNonUtc,
        Some(StripOffset::All) => OffsetMode::StripAll,
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let _guard = logging::init_logging(&config.logging)?;

    match cli.command {
        Commands::Validate { parameter, values } => validate(&config, &parameter, &values, cli.json),
        Commands::Range { value, kind } => range(&value, kind, cli.json),
        Commands::Interval { text, strip_offset } => interval(&text, offset_mode(strip_offset), cli.json),
        Commands::Params => params(&config, cli.json),
    }
}

fn validate(config: &Config, parameter: &str, values: &[String], json: bool) -> Result<ExitCode> {
    let registry = config.registry()?;
    let validator = TypeValidator::new();
    let mut failures = 0usize;

    for value in values {
        let outcome = validator.validate_named(&registry, parameter, value);
        match (&outcome, json) {
            (Ok(()), true) => println!(
                "{}",
                json!({ "parameter": parameter, "value": value, "valid": true })
            ),
            (Ok(()), false) => println!("ok       {value}"),
            (Err(err), true) => println!(
                "{}",
                json!({
                    "parameter": parameter,
                    "value": value,
                    "valid": false,
                    "kind": err.kind().as_str(),
                    "error": err.cause.to_string(),
                })
            ),
            (Err(err), false) => println!("invalid  {value}: {}", err.cause),
        }
        if outcome.is_err() {
            failures += 1;
        }
    }

    info!(parameter, checked = values.len(), failures, "validation finished");
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn range(value: &str, kind: RangeKind, json: bool) -> Result<ExitCode> {
    let context = || format!("Invalid {kind:?} range '{value}'").to_lowercase();
    let (text, encoded) = match kind {
        RangeKind::Decimal => {
            let range = parse_decimal_range(value).with_context(context)?;
            (range.to_string(), serde_json::to_value(range)?)
        }
        RangeKind::Integer => {
            let range = parse_integer_range(value).with_context(context)?;
            (range.to_string(), serde_json::to_value(range)?)
        }
        RangeKind::Date => {
            let range = parse_date_range(value).with_context(context)?;
            (range.to_string(), serde_json::to_value(range)?)
        }
    };
    if json {
        println!("{encoded}");
    } else {
        println!("{text}");
    }
    Ok(ExitCode::SUCCESS)
}

fn interval(text: &str, mode: OffsetMode, json: bool) -> Result<ExitCode> {
    let interval = IsoDateInterval::from_string(text)
        .with_context(|| format!("Invalid interval '{text}'"))?;
    let rendered = interval.render(mode).unwrap_or_default();
    if json {
        let precision = interval.from().map(|from| format!("{:?}", from.precision()));
        println!("{}", json!({ "interval": rendered, "precision": precision }));
    } else {
        println!("{rendered}");
    }
    Ok(ExitCode::SUCCESS)
}

fn params(config: &Config, json: bool) -> Result<ExitCode> {
    let registry = config.registry()?;
    for parameter in registry.iter() {
        if json {
            println!(
                "{}",
                json!({ "name": parameter.name, "type": parameter.ty.to_string() })
            );
        } else {
            println!("{:<36} {}", parameter.name, parameter.ty);
        }
    }
    Ok(ExitCode::SUCCESS)
}
