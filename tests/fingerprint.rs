// tests/fingerprint.rs

use cookplan::watch::{PlanFingerprint, fingerprint};

#[test]
fn fingerprint_is_stable_and_content_sensitive() {
    let a = fingerprint(b"[]");
    assert_eq!(a, fingerprint(b"[]"));
    assert_ne!(a, fingerprint(b"[ ]"));
    // blake3 hex digest
    assert_eq!(a.len(), 64);
}

#[test]
fn plan_fingerprint_tracks_the_last_recorded_load() {
    let mut fp = PlanFingerprint::new();
    assert!(fp.last().is_none());
    assert!(!fp.is_unchanged(b"[]"));

    fp.record(b"[]");
    assert!(fp.is_unchanged(b"[]"));
    assert!(!fp.is_unchanged(b"[1]"));

    fp.record(b"[1]");
    assert!(!fp.is_unchanged(b"[]"));
    assert_eq!(fp.last(), Some(fingerprint(b"[1]").as_str()));
}
