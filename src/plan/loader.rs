// src/plan/loader.rs

//! Dataset parsing and validation.
//!
//! The dataset is a JSON array of step records. Every record must carry
//! `id`, `parent`, `title`, `start_min`, `duration_min` and `description`.
//! Numeric fields are coerced leniently (numeric strings, booleans, null)
//! and then range-checked. The first offending record aborts the load with
//! a message naming it; callers keep their previous plan in that case.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::{CookplanError, Result};
use crate::plan::model::Task;

const REQUIRED_KEYS: [&str; 6] = [
    "id",
    "parent",
    "title",
    "start_min",
    "duration_min",
    "description",
];

/// Read a dataset file and return its raw bytes plus the validated tasks.
///
/// The bytes are returned so callers can fingerprint what they loaded.
pub fn load_plan(path: impl AsRef<Path>) -> Result<(Vec<u8>, Vec<Task>)> {
    let bytes = fs::read(path.as_ref())?;
    let tasks = parse_plan_bytes(&bytes)?;
    Ok((bytes, tasks))
}

/// Parse and validate a dataset from raw bytes.
pub fn parse_plan_bytes(bytes: &[u8]) -> Result<Vec<Task>> {
    let root: Value = serde_json::from_slice(bytes)?;
    parse_plan_value(&root)
}

/// Parse and validate a dataset from JSON text.
pub fn parse_plan_str(text: &str) -> Result<Vec<Task>> {
    parse_plan_bytes(text.as_bytes())
}

/// Validate an already-decoded JSON document.
pub fn parse_plan_value(root: &Value) -> Result<Vec<Task>> {
    let items = root.as_array().ok_or_else(|| {
        CookplanError::InvalidPlan("Root must be an array of step objects".to_string())
    })?;

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(items.len());

    for (idx, item) in items.iter().enumerate() {
        let task = parse_record(idx, item)?;
        if !seen.insert(task.id.clone()) {
            return Err(CookplanError::InvalidPlan(format!(
                "Item {idx} duplicates id '{}'",
                task.id
            )));
        }
        tasks.push(task);
    }

    Ok(tasks)
}

fn parse_record(idx: usize, item: &Value) -> Result<Task> {
    let obj = item
        .as_object()
        .ok_or_else(|| CookplanError::InvalidPlan(format!("Item {idx} is not an object")))?;

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !obj.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(CookplanError::InvalidPlan(format!(
            "Item {idx} missing: {}",
            missing.join(", ")
        )));
    }

    let start_min = coerce_number(&obj["start_min"]);
    let duration_min = coerce_number(&obj["duration_min"]);
    let (Some(start_min), Some(duration_min)) = (start_min, duration_min) else {
        return Err(CookplanError::InvalidPlan(format!(
            "Item {idx} has non-numeric start/duration"
        )));
    };
    // Each value is finite, but their sum can still overflow.
    if start_min < 0.0 || duration_min <= 0.0 || !(start_min + duration_min).is_finite() {
        return Err(CookplanError::InvalidPlan(format!(
            "Item {idx} invalid start/duration values"
        )));
    }

    Ok(Task {
        id: coerce_string(obj, "id"),
        lane: coerce_string(obj, "parent"),
        title: coerce_string(obj, "title"),
        start_min,
        duration_min,
        description: match &obj["description"] {
            Value::Null => String::new(),
            _ => coerce_string(obj, "description"),
        },
    })
}

/// Lenient numeric coercion. Returns `None` for anything that does not
/// denote a finite number.
fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().ok()?
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

fn coerce_string(obj: &Map<String, Value>, key: &str) -> String {
    match &obj[key] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
