// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::RuntimeEvent;

/// Handle for the plan file watcher.
///
/// Keeps the underlying `RecommendedWatcher` alive; dropping the handle
/// stops watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch `plan_path` and send `RuntimeEvent::ReloadRequested` when it is
/// created or modified.
///
/// The parent directory is watched (non-recursively) rather than the file
/// itself, so editors that save by replacing the file are still seen.
pub fn spawn_plan_watcher(
    plan_path: impl Into<PathBuf>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let plan_path = plan_path.into();
    let plan_path = plan_path.canonicalize().unwrap_or(plan_path);
    let dir = match plan_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    // No tracing context on the notify thread.
                    eprintln!("cookplan: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("cookplan: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("watching {:?}", dir))?;

    info!("plan watcher started on {:?}", plan_path);

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if !is_content_change(&event.kind) {
                continue;
            }
            if !event.paths.iter().any(|p| same_file(p, &plan_path)) {
                continue;
            }

            debug!(?event, "plan file changed");
            let reload = RuntimeEvent::ReloadRequested {
                path: plan_path.clone(),
            };
            if runtime_tx.send(reload).await.is_err() {
                break;
            }
        }
        debug!("plan watcher loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}

fn is_content_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

fn same_file(changed: &Path, plan: &Path) -> bool {
    changed == plan
        || changed
            .canonicalize()
            .map(|c| c == plan)
            .unwrap_or(false)
}
