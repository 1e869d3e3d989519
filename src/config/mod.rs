// src/config/mod.rs

//! Configuration loading and validation for cookplan.
//!
//! - `model.rs` defines the TOML-backed data model.
//! - `loader.rs` reads a config file from disk (or falls back to defaults).
//! - `validate.rs` checks layout constants and the people roster.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve_config};
pub use model::{
    ClockSection, ConfigFile, LayoutSection, PersonConfig, RawConfigFile, TimersSection,
};
