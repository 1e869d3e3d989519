// src/watch/hash.rs

//! Content fingerprinting for plan reloads.
//!
//! Editors often emit several change events for one save (truncate, write,
//! rename). Reloading resets the clock, so a reload only goes ahead when
//! the file's bytes actually differ from the last plan that was loaded.

/// Compute a stable fingerprint of some content.
pub fn fingerprint(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Remembers the fingerprint of the last successfully loaded plan.
#[derive(Debug, Clone, Default)]
pub struct PlanFingerprint {
    last: Option<String>,
}

impl PlanFingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, bytes: &[u8]) {
        self.last = Some(fingerprint(bytes));
    }

    pub fn is_unchanged(&self, bytes: &[u8]) -> bool {
        self.last.as_deref() == Some(fingerprint(bytes).as_str())
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
