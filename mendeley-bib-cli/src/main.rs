//! mendeley-bib CLI
//!
//! Command-line interface for converting a Mendeley Desktop library to BibTeX.

mod cli_types;
mod error;

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::Cli;
use error::CliError;
use mendeley_bib_lib::{
    ConvertOptions, ConvertReport, OutputTarget, convert_library, load_settings,
    load_settings_or_default, settings_path,
};

/// Exit status for a run that failed.
const EXIT_FAILURE: i32 = 1;

/// Exit status for a run stopped by Ctrl-C (128 + SIGINT).
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = run(&cli);
    match &result {
        Ok(report) if report.interrupted => eprintln!("{}", interrupted_message()),
        Ok(report) => log_summary(&cli, report),
        Err(e) => eprintln!("{} {}", "Error:".if_supports_color(Stderr, |t| t.red()), e),
    }

    if let Some(code) = exit_code(&result) {
        std::process::exit(code);
    }
}

fn interrupted_message() -> &'static str {
    "Interrupted by user."
}

/// Process exit status for a finished run, or `None` for a normal exit.
fn exit_code(result: &Result<ConvertReport, CliError>) -> Option<i32> {
    match result {
        Ok(report) if report.interrupted => Some(EXIT_INTERRUPTED),
        Ok(_) => None,
        Err(_) => Some(EXIT_FAILURE),
    }
}

fn run(cli: &Cli) -> Result<ConvertReport, CliError> {
    let options = build_options(cli)?;
    let target = OutputTarget::from_path(cli.output.clone());

    let cancel = Arc::new(AtomicBool::new(false));
    // Held until the conversion returns so the watcher stays alive.
    let _runtime = spawn_interrupt_watcher(cancel.clone())?;

    log::debug!("Reading {}", cli.database.display());
    Ok(convert_library(&cli.database, &target, &options, &cancel)?)
}

/// Merge the settings file with command-line flags.
fn build_options(cli: &Cli) -> Result<ConvertOptions, CliError> {
    let settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => load_settings_or_default(&settings_path())?,
    };

    Ok(ConvertOptions {
        substitutions: settings.substitution_table()?,
        capitalize_titles: cli.capitalize_titles || settings.capitalize_titles,
        quiet: cli.quiet,
    })
}

/// Start a runtime whose only job is to flip `cancel` on Ctrl-C.
///
/// The conversion loop polls the flag between entries, so an interrupted
/// run ends on an entry boundary and the output is flushed normally.
fn spawn_interrupt_watcher(
    cancel: Arc<AtomicBool>,
) -> Result<tokio::runtime::Runtime, CliError> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

    rt.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.store(true, Ordering::Relaxed);
        }
    });

    Ok(rt)
}

/// Log to stderr so stdout only ever carries BibTeX.
///
/// `--quiet` keeps errors only, `--verbose` adds debug output. `RUST_LOG`
/// overrides both.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stderr, |t| t.yellow()),
                record.args()
            ),
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red()),
                record.args()
            ),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        })
        .init();
}

fn log_summary(cli: &Cli, report: &ConvertReport) {
    let destination = match &cli.output {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };
    log::info!(
        "{} Wrote {} entries to {}",
        "\u{2714}".if_supports_color(Stderr, |t| t.green()),
        report.written,
        destination,
    );
    if !report.skipped.is_empty() {
        log::info!("  Skipped {} with unhandled types", report.skipped.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_run_exits_normally() {
        let report = ConvertReport {
            written: 3,
            ..Default::default()
        };
        assert_eq!(exit_code(&Ok(report)), None);
    }

    #[test]
    fn interrupted_run_exits_130() {
        let report = ConvertReport {
            written: 1,
            interrupted: true,
            ..Default::default()
        };
        assert_eq!(exit_code(&Ok(report)), Some(130));
        assert_eq!(interrupted_message(), "Interrupted by user.");
    }

    #[test]
    fn failed_run_exits_1() {
        let err = CliError::runtime("no runtime");
        assert_eq!(exit_code(&Err(err)), Some(1));
    }

    #[test]
    fn interrupt_watcher_starts_without_setting_the_flag() {
        let cancel = Arc::new(AtomicBool::new(false));
        let _runtime = spawn_interrupt_watcher(cancel.clone()).unwrap();
        assert!(!cancel.load(Ordering::Relaxed));
    }
}
