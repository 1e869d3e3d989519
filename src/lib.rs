// src/lib.rs

pub mod cli;
pub mod clock;
pub mod config;
pub mod engine;
pub mod errors;
pub mod format;
pub mod frontend;
pub mod logging;
pub mod people;
pub mod pins;
pub mod plan;
pub mod schedule;
pub mod snapshot;
pub mod timers;
pub mod types;
pub mod watch;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::clock::SystemTimeSource;
use crate::config::resolve_config;
use crate::engine::{CoreSession, Frame, FrameKind, Runtime, RuntimeEvent};
use crate::frontend::{Frontend, OutputFormat, TerminalFrontend};
use crate::plan::{Task, demo_plan, load_plan};

/// Real-time interval between timer bank ticks.
pub const TIMER_TICK: Duration = Duration::from_secs(1);

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config and plan loading
/// - the core session and its async runtime shell
/// - the timer tick and clock sampling intervals
/// - stdin command input
/// - (optional) plan file watcher
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(args.config.as_deref())?;
    let (plan_bytes, tasks) = initial_plan(&args)?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut frontend = TerminalFrontend::new(format);

    let core = CoreSession::new(&cfg, tasks, Arc::new(SystemTimeSource::new()));

    if args.dry_run {
        frontend.present(&Frame {
            kind: FrameKind::Full,
            snapshot: core.snapshot(),
        })?;
        debug!("dry-run complete (no session started)");
        return Ok(());
    }

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    // Optional plan watcher.
    let _watcher_handle = match (&args.plan, args.watch) {
        (Some(path), true) => Some(watch::spawn_plan_watcher(path, rt_tx.clone())?),
        (None, true) => {
            warn!("--watch needs --plan; the demo plan is not watched");
            None
        }
        _ => None,
    };

    spawn_ctrl_c(rt_tx.clone());
    spawn_ticker(rt_tx.clone(), TIMER_TICK, MissedTickBehavior::Burst, || {
        RuntimeEvent::TimerTick
    });
    spawn_ticker(
        rt_tx.clone(),
        Duration::from_millis(cfg.clock.sample_interval_ms),
        MissedTickBehavior::Skip,
        || RuntimeEvent::ClockSample,
    );
    spawn_stdin_reader(rt_tx.clone());

    // Show the initial chart.
    rt_tx.send(RuntimeEvent::Input("show".to_string())).await?;

    let mut runtime = Runtime::new(core, rt_rx, frontend);
    if let Some(bytes) = &plan_bytes {
        runtime = runtime.with_loaded_plan(bytes);
    }
    runtime.run().await?;
    Ok(())
}

/// The plan given on the command line, or the demo plan.
fn initial_plan(args: &CliArgs) -> Result<(Option<Vec<u8>>, Vec<Task>)> {
    match &args.plan {
        Some(path) => {
            let (bytes, tasks) = load_plan(path)?;
            info!(path = ?path, tasks = tasks.len(), "plan loaded");
            Ok((Some(bytes), tasks))
        }
        None => {
            info!("no --plan given; using the demo plan");
            Ok((None, demo_plan()))
        }
    }
}

fn spawn_ctrl_c(tx: mpsc::Sender<RuntimeEvent>) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
    });
}

/// Send `make()` into the runtime every `period`, starting one period from
/// now. Stops when the runtime goes away.
fn spawn_ticker(
    tx: mpsc::Sender<RuntimeEvent>,
    period: Duration,
    missed: MissedTickBehavior,
    make: fn() -> RuntimeEvent,
) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(missed);
        loop {
            interval.tick().await;
            if tx.send(make()).await.is_err() {
                break;
            }
        }
    });
}

/// Forward stdin lines as `RuntimeEvent::Input`; end of input shuts down.
fn spawn_stdin_reader(tx: mpsc::Sender<RuntimeEvent>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(RuntimeEvent::Input(line)).await.is_err() {
                        return;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("failed to read stdin: {e}");
                    break;
                }
            }
        }
        let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
    });
}
