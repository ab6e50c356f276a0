use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{debug, Level, LevelFilter};
use std::str::FromStr;

const RUST_LOG_ENV: &str = "RUST_LOG";

/// Transport crates that are chatty at `debug`.
const QUIET_TARGETS: [&str; 4] = ["jsonrpsee_client_transport", "jsonrpsee_core", "hyper", "reqwest"];

fn color_from_level(level: Level) -> ColoredString {
    match level {
        log::Level::Error => "ERROR".red(),
        log::Level::Warn => "WARN".yellow(),
        log::Level::Info => "INFO".green(),
        log::Level::Debug => "DEBUG".blue(),
        log::Level::Trace => "TRACE".white(),
    }
}

/// # Panics
/// Panics if a logger is already installed.
fn init_logging_with_level(log_level: LevelFilter) {
    let dispatch = QUIET_TARGETS.iter().fold(
        fern::Dispatch::new()
            .format(|out, message, record| {
                let time = Local::now().format("%H:%M:%S%.3f");
                let color = color_from_level(record.level());
                out.finish(format_args!("{time} {color} > {message}"));
            })
            .level(log_level),
        |dispatch, target| dispatch.level_for(*target, log_level.min(LevelFilter::Info)),
    );
    dispatch
        .chain(std::io::stdout())
        .apply()
        .inspect_err(|e| println!("💥 Failed to initialize logging with level `{log_level}`: {e}"))
        .unwrap();

    if let Some(log_level) = log_level.to_level() {
        debug!("🪵 Logging initialized with level: {log_level}");
    }
}

fn parse_log_level_from_str(log_level: &str) -> LevelFilter {
    LevelFilter::from_str(log_level).unwrap_or_else(|_| {
        panic!(
            "Invalid log level set with `{}`, got: {}",
            RUST_LOG_ENV, log_level
        )
    })
}

/// `--log-level` wins over `RUST_LOG`, which wins over `info`.
fn effective_level(cli_level: Option<LevelFilter>, env_level: Option<&str>) -> LevelFilter {
    cli_level
        .or_else(|| env_level.map(parse_log_level_from_str))
        .unwrap_or(LevelFilter::Info)
}

// Setup logging once
use std::sync::Once;
static INIT: Once = Once::new();

/// # Panics
/// Panics if `RUST_LOG` is consulted and is not a valid log level.
pub fn init_logging(cli_level: Option<LevelFilter>) {
    INIT.call_once(|| {
        let env_level = std::env::var(RUST_LOG_ENV).ok();
        init_logging_with_level(effective_level(cli_level, env_level.as_deref()));
    });
}
