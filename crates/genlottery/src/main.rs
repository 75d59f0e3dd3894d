//! `genlottery` — random number generator for UK lottery games.
//!
//! Entry point: argument parsing, tracing setup, config resolution, and
//! dispatch to either the plain-text surface (`--text`) or the
//! interactive form surface (default).

mod cli;
mod config;
mod error;
mod output;
mod tui;

use clap::Parser;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use genlottery_core::{ResultStore, Session, SessionAction, SessionRequest, StoreError};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    if cli.mode.version {
        println!("genlottery Version: {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let config = config::load_config_or_default();

    if cli.text {
        init_tracing(cli.verbose);
        if let Err(err) = run_text(&cli, &config) {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(code);
        }
    } else if let Err(err) = run_form(&cli, &config) {
        // The form surface reports through color-eyre
        eprintln!("{err:?}");
        std::process::exit(error::exit_code::GENERAL);
    }
}

/// Tracing to stderr for text mode.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Tracing to a file for form mode. Logging to stdout/stderr would
/// corrupt the terminal UI. The guard must be held until exit so logs
/// flush.
fn init_file_tracing(verbosity: u8) -> WorkerGuard {
    let filter_str = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("genlottery={filter_str}")));

    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "genlottery.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    guard
}

/// Open the store at the configured directory, or the `~/lottery-db`
/// default.
fn open_store(config: &Config) -> Result<ResultStore, StoreError> {
    match config.save_dir {
        Some(ref dir) => Ok(ResultStore::new(dir.clone())),
        None => ResultStore::open_default(),
    }
}

/// Resolve the request described by the flags, with config fallbacks.
fn build_request(cli: &Cli, config: &Config) -> SessionRequest {
    let action = if cli.mode.delete {
        SessionAction::Delete
    } else if cli.mode.print {
        SessionAction::ShowSaved
    } else {
        SessionAction::Generate {
            save: !cli.mode.no_save,
        }
    };

    SessionRequest {
        action,
        lottery_type: cli.lottery_type.unwrap_or(config.default_type),
        lines: cli.lines.unwrap_or(config.default_lines),
    }
}

/// One-shot text mode: perform a single action and print the outcome.
fn run_text(cli: &Cli, config: &Config) -> Result<(), CliError> {
    let store = open_store(config)?;
    let mut session = Session::new(store);

    let request = build_request(cli, config);
    debug!(?request, "text mode dispatch");

    let payload = session.handle(&request)?;
    let saved_view = matches!(request.action, SessionAction::ShowSaved);
    if saved_view && !payload.results.is_empty() {
        output::print_output("Displaying a previously saved set\n");
    }
    output::print_output(&output::render(&payload, saved_view));

    session.finish();
    Ok(())
}

/// Interactive mode: run the form surface until the user quits.
fn run_form(cli: &Cli, config: &Config) -> color_eyre::Result<()> {
    // Hooks before entering the terminal, so early panics restore it
    tui::install_hooks()?;
    let _log_guard = init_file_tracing(cli.verbose);

    let store = open_store(config)?;
    let session = Session::new(store);

    let defaults = build_request(cli, config);
    let save = !cli.mode.no_save;
    let mut app = tui::app::FormApp::new(session, defaults.lottery_type, defaults.lines, save);

    let mut tui = tui::Tui::new()?;
    tui.enter()?;
    app.run(&mut tui)?;
    tui.exit()?;

    Ok(())
}
