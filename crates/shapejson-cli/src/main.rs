use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TimestampArg {
    Iso8601,
    Rfc822,
    Unixtimestamp,
}

#[derive(Parser, Debug)]
#[command(
    name = "shapejson-cli",
    about = "Encode a JSON document through a shape description",
    version
)]
struct Args {
    /// Shape description (JSON)
    #[arg(short, long)]
    schema: PathBuf,

    /// Format for timestamp shapes without `timestamp_format` metadata
    #[arg(long, value_enum, default_value_t = TimestampArg::Iso8601)]
    timestamp_format: TimestampArg,

    /// Reject scalar values whose kind differs from the shape
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let schema_text = std::fs::read_to_string(&args.schema)
        .with_context(|| format!("reading schema {}", args.schema.display()))?;
    let shape = shapejson::Shape::from_json_str(&schema_text).context("building shape")?;
    debug!(shape = shape.type_name(), "shape loaded");

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let default_timestamp_format = match args.timestamp_format {
        TimestampArg::Iso8601 => shapejson::TimestampFormat::Iso8601,
        TimestampArg::Rfc822 => shapejson::TimestampFormat::Rfc822,
        TimestampArg::Unixtimestamp => shapejson::TimestampFormat::UnixTimestamp,
    };
    let options = shapejson::Options {
        default_timestamp_format,
        strict: args.strict,
    };

    let input: serde_json::Value = serde_json::from_str(&buf).context("parsing input JSON")?;
    let value = shapejson::Value::from(input);
    let out = shapejson::encode_to_string(&shape, &value, &options)?;
    println!("{}", out);

    Ok(())
}
