#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub use cookplan_test_utils::init_tracing;

/// Write `json` to a fresh temp file; the file lives as long as the handle.
pub fn write_plan(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp plan");
    file.write_all(json.as_bytes()).expect("write temp plan");
    file.flush().expect("flush temp plan");
    file
}

/// A well-formed two-lane dataset.
pub const TWO_LANE_PLAN: &str = r#"[
  {"id":"s1","parent":"Sauce","title":"Reduce stock","start_min":0,"duration_min":20,"description":"Low heat"},
  {"id":"s2","parent":"Sauce","title":"Mount butter","start_min":20,"duration_min":5,"description":""},
  {"id":"p1","parent":"Pasta","title":"Boil water","start_min":5,"duration_min":10,"description":null},
  {"id":"p2","parent":"Pasta","title":"Cook pasta","start_min":15,"duration_min":9,"description":"Salted"}
]"#;
