// src/plan/mod.rs

//! The cooking plan dataset.
//!
//! - [`model`] holds the validated [`Task`] type.
//! - [`loader`] parses and validates the JSON dataset.
//! - [`demo`] provides the built-in sample plan.

pub mod demo;
pub mod loader;
pub mod model;

pub use demo::demo_plan;
pub use loader::{load_plan, parse_plan_bytes, parse_plan_str, parse_plan_value};
pub use model::Task;
