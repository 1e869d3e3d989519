// src/watch/mod.rs

//! Reloading the plan when its file changes.
//!
//! - [`watcher`] wires a `notify` watcher to the runtime channel.
//! - [`hash`] fingerprints plan content so identical rewrites are skipped.

pub mod hash;
pub mod watcher;

pub use hash::{PlanFingerprint, fingerprint};
pub use watcher::{WatcherHandle, spawn_plan_watcher};
