//! Banknote Log Reader CLI Application
//!
//! Command-line consumer of the banknote-log-decoder library. It adds what
//! the library deliberately leaves out:
//! - Reading the log file from disk
//! - Reporting discarded blocks
//! - Rendering the decoded results as a text report or JSON

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod report;

/// Banknote Log Reader - decode and analyze device diagnostic logs
#[derive(Parser, Debug)]
#[command(name = "banknote-log-cli")]
#[command(about = "Decode and analyze banknote device diagnostic logs", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the diagnostic log file
    #[arg(value_name = "FILE")]
    log: PathBuf,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print only the per-event-code summary
    #[arg(long)]
    summary_only: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Banknote Log Reader CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", banknote_log_decoder::VERSION);

    let text = std::fs::read_to_string(&args.log)
        .with_context(|| format!("failed to read log file {:?}", args.log))?;

    let parsed = banknote_log_decoder::parse(&text);
    for block in &parsed.errors {
        log::warn!("discarded block {}: {}", block.block_index, block.error);
    }

    let codes = banknote_log_decoder::default_event_codes();
    let rendered = if args.json {
        report::render_json(&parsed, &codes)?
    } else {
        report::render_text(&parsed, &codes, args.summary_only)?
    };
    print!("{}", rendered);

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
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
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
