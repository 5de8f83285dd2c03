use std::ffi::OsStr;
use std::fs;
use std::io::{stderr, stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use wallet_csv_converter::engine::ConversionEngine;
use wallet_csv_converter::types::{ConversionContext, ValidationError, WalletAddress};

/// 5 MiB, the largest upload the converter accepts.
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
const OUTPUT_FILE_PREFIX: &str = "converted_";

/// Converts a wallet transaction export into a portfolio-tracker import CSV.
#[derive(Parser, Debug)]
#[command(name = "wallet-csv-converter", version)]
struct Cli {
    /// Exported wallet history (.csv)
    input: Option<PathBuf>,

    /// Wallet address the history belongs to (at least 10 characters)
    #[arg(short, long, env = "WALLET_ADDRESS")]
    wallet: Option<String>,

    /// Write the converted file here instead of stdout
    #[arg(short, long, conflicts_with = "save")]
    output: Option<PathBuf>,

    /// Write the converted file next to the input as converted_<name>
    #[arg(long)]
    save: bool,

    /// Reject inputs larger than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_size: u64,

    /// error, warn, info, debug or trace
    #[arg(long, default_value = "error")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let input = cli.input.ok_or(ValidationError::MissingInput)?;
    let wallet = WalletAddress::parse(cli.wallet.as_deref().unwrap_or_default())?;
    let bytes = read_upload(&input, cli.max_size)?;

    let engine = ConversionEngine::new(ConversionContext::new(wallet));

    let timer = Instant::now();
    let report = engine.run(&bytes)?;
    let duration = timer.elapsed();

    info!("Converted {} rows in: {duration:?}", report.rows);

    let destination = match (cli.output, cli.save) {
        (Some(path), _) => Some(path),
        (None, true) => Some(converted_file_name(&input)),
        (None, false) => None
    };

    match destination {
        Some(path) => {
            fs::write(&path, report.csv.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => write_to_stdout(&report.csv)?
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the converted CSV, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

/// Applies the upload checks (extension and size) and reads the file.
fn read_upload(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    let is_csv = path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

    if !is_csv {
        return Err(ValidationError::NotCsv { path: path.to_path_buf() }.into());
    }

    let size = fs::metadata(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .len();

    if size > max_size {
        return Err(ValidationError::PayloadTooLarge { size, limit: max_size }.into());
    }

    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

fn converted_file_name(input: &Path) -> PathBuf {
    let name = input.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    input.with_file_name(format!("{OUTPUT_FILE_PREFIX}{name}"))
}

fn write_to_stdout(csv: &str) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    output.write_all(csv.as_bytes())?;
    output.flush()?;

    Ok(())
}
