// src/logging.rs

//! Logging setup for `cookplan` using `tracing` + `tracing-subscriber`.
//!
//! Filter selection:
//! 1. `--log-level` sets the level for the `cookplan` crate itself;
//!    dependencies (notify, tokio) stay at `warn`.
//! 2. Otherwise `COOKPLAN_LOG` is read as `EnvFilter` directives, so single
//!    modules can be opened up, e.g.
//!    `COOKPLAN_LOG=warn,cookplan::engine=debug,cookplan::watch=trace`.
//! 3. Otherwise `warn`, so the terminal view is not interleaved with logs.
//!
//! Logs are sent to STDERR so that stdout carries only frames.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "COOKPLAN_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup. A malformed `COOKPLAN_LOG` is reported as
/// an error instead of being ignored.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(cli_level, env.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Resolve the filter from the CLI flag and the raw `COOKPLAN_LOG` value.
pub fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> Result<EnvFilter> {
    let directives = match (cli_level, env.map(str::trim)) {
        (Some(level), _) => format!("{DEFAULT_DIRECTIVES},cookplan={}", level.as_str()),
        (None, Some(env)) if !env.is_empty() => env.to_string(),
        _ => DEFAULT_DIRECTIVES.to_string(),
    };

    EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log filter {directives:?} (from --log-level or {LOG_ENV})"))
}
