// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `cookplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cookplan",
    version,
    about = "Follow a cooking plan on a live timeline with kitchen timers.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan dataset (JSON array of steps).
    ///
    /// If omitted, a built-in demo plan is used.
    #[arg(long, value_name = "PATH")]
    pub plan: Option<PathBuf>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Cookplan.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reload the plan whenever its file changes.
    #[arg(long)]
    pub watch: bool,

    /// Emit frames and messages as JSON lines instead of text.
    #[arg(long)]
    pub json: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COOKPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load + validate, print the layout, then exit.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive spelling understood by `tracing_subscriber::EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
