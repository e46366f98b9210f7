//! The `scribe` binary: watches chat-page snapshots and forwards each newly
//! completed exchange to a local capture endpoint.

mod cmd;
mod config;
pub mod error;
mod source;

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use config::Config;
use tracing::{error, trace};

#[derive(Parser)]
#[command(name = "scribe", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten, next_help_heading = "Global Options")]
    globals: Globals,

    #[command(subcommand)]
    command: cmd::Commands,
}

#[derive(Debug, clap::Args)]
pub struct Globals {
    /// Path to the configuration file.
    ///
    /// Defaults to `./scribe.toml`, then `~/.config/scribe.toml`.
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase verbosity of logging.
    ///
    /// Can be specified multiple times to increase verbosity.
    ///
    /// Defaults to printing "error" messages. For each increase in verbosity,
    /// the log level is set to "warn", "info", "debug", and "trace"
    /// respectively.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all output, including errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    configure_logging(cli.globals.verbose, cli.globals.quiet);
    trace!(command = cli.command.name(), "Starting CLI run.");

    let config = match Config::load(cli.globals.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            error!(%error, "Failed to load configuration.");
            return ExitCode::FAILURE;
        }
    };

    match cli.command.run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "Command failed.");
            ExitCode::FAILURE
        }
    }
}

fn configure_logging(verbose: u8, quiet: bool) {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::fmt;

    let mut level = match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    if quiet {
        level = LevelFilter::OFF;
    }

    let mut filter = vec!["off".to_owned()];
    for krate in ["capture", "cli", "dom", "extract", "sink"] {
        filter.push(format!("scribe_{krate}={level}"));
    }

    let format = fmt::format().with_target(false).compact();

    if level < LevelFilter::DEBUG {
        tracing_subscriber::fmt()
            .event_format(format)
            .without_time()
            .with_ansi(true)
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_env_filter(filter.join(","))
            .init();
    } else {
        tracing_subscriber::fmt()
            .event_format(format)
            .with_ansi(true)
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_env_filter(filter.join(","))
            .init();
    }
}
