// src/engine/runtime.rs

use std::collections::VecDeque;
use std::fmt;
use std::path::Path;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::Result;
use crate::frontend::Frontend;
use crate::plan::parse_plan_bytes;
use crate::watch::PlanFingerprint;

use super::core::CoreSession;
use super::{CoreCommand, RuntimeEvent};

/// Drives the core session in response to `RuntimeEvent`s and delegates
/// presentation to a `Frontend`.
///
/// All session semantics live in `CoreSession`; this struct does the IO:
/// receiving events, reading plan files and writing frames.
pub struct Runtime<F: Frontend> {
    core: CoreSession,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    frontend: F,
    fingerprint: PlanFingerprint,
}

impl<F: Frontend> fmt::Debug for Runtime<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}

impl<F: Frontend> Runtime<F> {
    pub fn new(core: CoreSession, event_rx: mpsc::Receiver<RuntimeEvent>, frontend: F) -> Self {
        Self {
            core,
            event_rx,
            frontend,
            fingerprint: PlanFingerprint::new(),
        }
    }

    /// Seed the fingerprint with the bytes of the initially loaded plan so
    /// an unchanged file is not reloaded by the watcher.
    pub fn with_loaded_plan(mut self, bytes: &[u8]) -> Self {
        self.fingerprint.record(bytes);
        self
    }

    /// Main event loop.
    ///
    /// - Consumes `RuntimeEvent`s from `event_rx`.
    /// - Feeds them into the core session.
    /// - Executes the commands returned by the core.
    pub async fn run(mut self) -> Result<()> {
        info!("cookplan runtime started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            let step = self.core.step(event);
            let keep_running = self.execute_all(step.commands, step.keep_running).await?;

            if !keep_running {
                info!("core requested exit; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(())
    }

    /// Execute commands in order. Plan loads feed their result back into
    /// the core immediately, and the follow-up commands join the queue.
    async fn execute_all(
        &mut self,
        commands: Vec<CoreCommand>,
        mut keep_running: bool,
    ) -> Result<bool> {
        let mut queue: VecDeque<CoreCommand> = commands.into();

        while let Some(command) = queue.pop_front() {
            match command {
                CoreCommand::Present(frame) => self.frontend.present(&frame)?,
                CoreCommand::Notify(message) => self.frontend.notify(&message)?,
                CoreCommand::LoadPlan { path, force } => {
                    if let Some(event) = self.load_plan(&path, force).await {
                        let step = self.core.step(event);
                        keep_running &= step.keep_running;
                        queue.extend(step.commands);
                    }
                }
                CoreCommand::RequestExit => {
                    debug!("core issued RequestExit command");
                    keep_running = false;
                }
            }
        }

        Ok(keep_running)
    }

    /// Read and validate a plan file.
    ///
    /// Returns `None` when the content matches the last successful load and
    /// the load was not forced.
    async fn load_plan(&mut self, path: &Path, force: bool) -> Option<RuntimeEvent> {
        let source = path.display().to_string();

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                return Some(RuntimeEvent::PlanRejected {
                    source,
                    message: e.to_string(),
                });
            }
        };

        if !force && self.fingerprint.is_unchanged(&bytes) {
            debug!(%source, "plan content unchanged; skipping reload");
            return None;
        }

        match parse_plan_bytes(&bytes) {
            Ok(tasks) => {
                self.fingerprint.record(&bytes);
                Some(RuntimeEvent::PlanLoaded { source, tasks })
            }
            Err(e) => Some(RuntimeEvent::PlanRejected {
                source,
                message: e.to_string(),
            }),
        }
    }
}
