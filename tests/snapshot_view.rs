// tests/snapshot_view.rs

use cookplan::config::ConfigFile;
use cookplan::format::{fmt_duration, fmt_marker, fmt_mmss, fmt_span};
use cookplan::plan::demo_plan;
use cookplan::timers::DisplayState;
use cookplan_test_utils::builders::ConfigFileBuilder;
use cookplan_test_utils::session::SessionHarness;

fn demo_session(cfg: &ConfigFile) -> SessionHarness {
    SessionHarness::new(cfg, demo_plan())
}

fn plain_demo() -> SessionHarness {
    demo_session(&ConfigFileBuilder::new().build())
}

#[test]
fn readout_formats() {
    assert_eq!(fmt_mmss(0), "0:00");
    assert_eq!(fmt_mmss(125), "2:05");
    assert_eq!(fmt_mmss(3600), "60:00");

    assert_eq!(fmt_duration(12.0), "12 min");
    assert_eq!(fmt_duration(60.0), "1h");
    assert_eq!(fmt_duration(65.0), "1h 5m");
    assert_eq!(fmt_duration(-3.0), "0 min");

    assert_eq!(fmt_marker(2.6), "3m");
    assert_eq!(fmt_span(25.0, 33.0), "25-33m");
    assert_eq!(fmt_span(1.5, 2.0), "1.5-2m");
}

#[test]
fn demo_lanes_are_sorted_and_colored_by_position() {
    let s = plain_demo();
    let snapshot = s.core.snapshot();

    let names: Vec<&str> = snapshot.lanes.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Main – Ribeye", "Salad", "Side – Roasted Veg"]);

    let side = &snapshot.lanes[2];
    assert_eq!(side.rows, 2);
    assert_eq!(side.top, snapshot.lanes[1].top + snapshot.lanes[1].height);
    assert_ne!(snapshot.lanes[0].color, snapshot.lanes[1].color);
}

#[test]
fn bars_carry_assignees_and_lanes_carry_people() {
    let cfg = ConfigFileBuilder::new().with_person("Tim").build();
    let mut s = demo_session(&cfg);

    s.input("assign p1 cut_veg");
    let snapshot = s.core.snapshot();

    let side = snapshot
        .lanes
        .iter()
        .find(|l| l.name == "Side – Roasted Veg")
        .expect("side lane");
    assert_eq!(side.people, vec!["p1".to_string()]);

    let cut = side
        .bars
        .iter()
        .find(|b| b.geometry.task_id == "cut_veg")
        .expect("cut_veg bar");
    assert_eq!(cut.assignees, vec!["p1".to_string()]);

    let salad = snapshot
        .lanes
        .iter()
        .find(|l| l.name == "Salad")
        .expect("salad lane");
    assert!(salad.people.is_empty());

    assert!(snapshot.render_text().contains("[Tim]"));
}

#[test]
fn pins_show_duration_and_span() {
    let mut s = plain_demo();
    s.input("pin preheat_oven");

    let snapshot = s.core.snapshot();
    let pin = &snapshot.pins[0];
    assert_eq!(pin.task_id, "preheat_oven");
    assert_eq!(pin.duration, "1h 5m");
    assert_eq!(pin.span, "0-65m");
}

#[test]
fn status_line_lists_only_active_timers() {
    let mut s = plain_demo();
    s.input("timer set t2 0 30");
    s.input("timer start t2");

    let snapshot = s.core.snapshot();
    assert_eq!(snapshot.timers.len(), 3);
    assert_eq!(snapshot.timers[1].state, DisplayState::CountingDown);
    assert_eq!(snapshot.timers[1].remaining, "0:30");

    let line = snapshot.status_line();
    assert!(line.starts_with("[paused] 0:00"), "{line}");
    assert!(line.contains("t2 0:30"), "{line}");
    assert!(!line.contains("t1"), "{line}");
}

#[test]
fn snapshot_serializes_to_json() {
    let mut s = plain_demo();
    s.input("start");
    s.advance_minutes(1.0);

    let value = serde_json::to_value(s.core.snapshot()).expect("serializable");

    assert_eq!(value["clock"]["playing"], true);
    assert_eq!(value["clock"]["elapsed"], "1:00");
    assert_eq!(value["timers"][0]["state"], "idle");
    assert_eq!(value["timers"][0]["mode"], "down");
    // bar geometry is flattened next to the assignees
    let bar = &value["lanes"][0]["bars"][0];
    assert!(bar.get("task_id").is_some());
    assert!(bar.get("assignees").is_some());
}
