// tests/session_core.rs

mod common;
use crate::common::init_tracing;

use std::path::PathBuf;
use std::time::Duration;

use cookplan::config::ConfigFile;
use cookplan::engine::{CoreCommand, FrameKind, RuntimeEvent};
use cookplan::timers::DisplayState;
use cookplan_test_utils::builders::{ConfigFileBuilder, PlanBuilder, side_lane};
use cookplan_test_utils::session::{SessionHarness, frame_kinds, frames, notes};

fn session_with(cfg: &ConfigFile) -> SessionHarness {
    SessionHarness::new(cfg, side_lane())
}

fn plain_session() -> SessionHarness {
    session_with(&ConfigFileBuilder::new().build())
}

#[test]
fn startup_state_comes_from_config() {
    init_tracing();

    let cfg = ConfigFileBuilder::new()
        .with_person("Tim")
        .with_person("Sam")
        .with_timers(2)
        .build();
    let s = session_with(&cfg);

    assert_eq!(s.core.timers().len(), 2);
    assert_eq!(s.core.roster().people().len(), 2);
    assert_eq!(s.core.schedule().lanes().len(), 1);
    assert!(s.core.pins().pinned().is_empty());
    assert_eq!(s.core.error(), None);
}

#[test]
fn commands_show_a_full_frame() {
    let mut s = plain_session();

    let step = s.input("start");
    assert!(step.keep_running);
    assert_eq!(frame_kinds(&step), vec![FrameKind::Full]);

    s.advance_minutes(4.0);
    let step = s.input("show");
    let presented = frames(&step);
    let [frame] = presented[..] else {
        panic!("expected one frame");
    };
    assert!(frame.snapshot.clock.playing);
    assert_eq!(frame.snapshot.clock.elapsed, "4:00");
    assert_eq!(frame.snapshot.clock.marker_x, 48.0);
}

#[test]
fn jump_with_garbage_is_ignored() {
    let mut s = plain_session();

    s.input("jump 10");
    assert_eq!(s.core.clock().current_minutes(), 10.0);

    s.input("jump later");
    assert_eq!(s.core.clock().current_minutes(), 10.0);
}

#[test]
fn unparseable_input_is_reported_without_a_frame() {
    let mut s = plain_session();

    let step = s.input("flambé");
    assert!(step.keep_running);
    assert!(frame_kinds(&step).is_empty());
    assert_eq!(notes(&step).len(), 1);

    let step = s.input("   ");
    assert!(step.commands.is_empty());
}

#[test]
fn timer_tick_reports_expiry_by_name() {
    let cfg = ConfigFileBuilder::new().with_timers(1).build();
    let mut s = session_with(&cfg);

    s.input("timer set t1 0 2");
    s.input("timer name t1 eggs");
    s.input("timer start t1");

    let step = s.step(RuntimeEvent::TimerTick);
    assert!(notes(&step).is_empty());
    assert_eq!(frame_kinds(&step), vec![FrameKind::Status]);

    let step = s.step(RuntimeEvent::TimerTick);
    assert_eq!(notes(&step), vec!["timer t1 (eggs) expired"]);
    assert_eq!(
        s.core.timers().get("t1").map(|t| t.display_state()),
        Some(DisplayState::Expired)
    );

    // nothing running any more: ticks are silent
    let step = s.step(RuntimeEvent::TimerTick);
    assert!(step.commands.is_empty());
}

#[test]
fn starting_a_zero_length_timer_stays_quiet() {
    let cfg = ConfigFileBuilder::new().with_timers(1).build();
    let mut s = session_with(&cfg);

    s.input("timer start t1");
    assert!(!s.core.timers().any_running());

    assert!(s.tick_timers(3).is_empty());
    let t1 = s.core.timers().get("t1").expect("t1");
    assert_eq!(t1.display_state(), DisplayState::Idle);
    let line = s.core.snapshot().status_line();
    assert!(!line.contains("t1"), "{line}");
}

#[test]
fn expiry_with_zeroed_fields_is_not_announced() {
    let cfg = ConfigFileBuilder::new().with_timers(1).build();
    let mut s = session_with(&cfg);

    s.input("timer set t1 0 2");
    s.input("timer start t1");
    // the fields are edited while the countdown runs
    s.input("timer set t1 0 0");

    let messages = s.tick_timers(2);
    assert!(messages.is_empty(), "{messages:?}");
    let t1 = s.core.timers().get("t1").expect("t1");
    assert!(!t1.is_running());
    assert_eq!(t1.display_state(), DisplayState::Idle);
}

#[test]
fn clock_sampling_emits_once_per_second_while_playing() {
    let mut s = plain_session();

    // stopped: no frames
    assert!(s.step(RuntimeEvent::ClockSample).commands.is_empty());

    s.input("start");
    let step = s.step(RuntimeEvent::ClockSample);
    assert_eq!(frame_kinds(&step), vec![FrameKind::Status]);

    s.advance(Duration::from_millis(250));
    assert!(s.step(RuntimeEvent::ClockSample).commands.is_empty());

    s.advance(Duration::from_millis(800));
    assert_eq!(
        frame_kinds(&s.step(RuntimeEvent::ClockSample)),
        vec![FrameKind::Status]
    );
}

#[test]
fn assignment_requires_known_person_and_task() {
    let cfg = ConfigFileBuilder::new().with_person("Tim").build();
    let mut s = session_with(&cfg);

    s.input("assign p1 B");
    assert!(s.core.assignments().is_assigned("B", "p1"));

    s.input("assign p9 B");
    s.input("assign p1 nope");
    assert_eq!(s.core.assignments().iter().count(), 1);

    s.input("assign-lane p1 Side");
    for id in ["A", "B", "C"] {
        assert!(s.core.assignments().is_assigned(id, "p1"), "{id}");
    }

    s.input("assign-lane p1 Side");
    assert_eq!(s.core.assignments().iter().count(), 0);
}

#[test]
fn removing_a_person_cascades_to_assignments() {
    let mut s = plain_session();

    s.input("person add Tim");
    s.input("person add Sam");
    s.input("assign-lane p1 Side");
    s.input("assign p2 A");

    s.input("person remove p1");

    assert!(!s.core.roster().contains("p1"));
    assert_eq!(s.core.assignments().assignees("A"), vec!["p2".to_string()]);
    assert!(!s.core.assignments().is_assigned("B", "p1"));

    let snapshot = s.core.snapshot();
    let lane = &snapshot.lanes[0];
    assert_eq!(lane.people, vec!["p2".to_string()]);
}

#[test]
fn default_config_starts_with_two_cooks() {
    let s = session_with(&ConfigFile::default());

    let names: Vec<&str> = s
        .core
        .roster()
        .people()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Tim", "Tiff"]);
}

#[test]
fn pins_follow_commands() {
    let mut s = plain_session();

    s.input("pin A");
    s.input("pin C");
    s.input("pin nope");

    let ids: Vec<&str> = s.core.pins().pinned().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["C", "A"]);

    s.input("unpin C");
    assert_eq!(s.core.pins().pinned().len(), 1);
}

#[test]
fn load_requests_a_forced_plan_read() {
    let mut s = plain_session();

    let step = s.input("load dinner.json");
    assert!(matches!(
        step.commands.as_slice(),
        [CoreCommand::LoadPlan { path, force: true }] if path == &PathBuf::from("dinner.json")
    ));

    let step = s.step(RuntimeEvent::ReloadRequested {
        path: PathBuf::from("dinner.json"),
    });
    assert!(matches!(
        step.commands.as_slice(),
        [CoreCommand::LoadPlan { force: false, .. }]
    ));
}

#[test]
fn loaded_plan_resets_clock_and_pins_and_prunes_assignments() {
    let mut s = plain_session();
    s.input("person add Tim");
    s.input("assign-lane p1 Side");
    s.input("pin A");
    s.input("timer set t1 1 0");
    s.input("timer start t1");
    s.input("start");
    s.advance_minutes(3.0);

    let tasks = PlanBuilder::new()
        .task("A", "Side", 0.0, 5.0)
        .task("Z", "Other", 0.0, 5.0)
        .build();
    let step = s.step(RuntimeEvent::PlanLoaded {
        source: "dinner.json".to_string(),
        tasks,
    });

    assert_eq!(notes(&step), vec!["loaded 2 task(s) from dinner.json"]);
    assert_eq!(frame_kinds(&step), vec![FrameKind::Full]);

    assert!(!s.core.clock().is_playing());
    assert_eq!(s.core.clock().current_minutes(), 0.0);
    assert!(s.core.pins().pinned().is_empty());
    assert!(s.core.assignments().is_assigned("A", "p1"));
    assert_eq!(s.core.assignments().iter().count(), 1);
    assert_eq!(s.core.schedule().lanes().len(), 2);
    // timers are independent of the plan
    assert!(s.core.timers().any_running());
}

#[test]
fn rejected_plan_keeps_the_old_one_and_records_the_error() {
    let mut s = plain_session();

    let step = s.step(RuntimeEvent::PlanRejected {
        source: "bad.json".to_string(),
        message: "Item 0 is not an object".to_string(),
    });

    assert_eq!(
        notes(&step),
        vec!["could not load bad.json: Item 0 is not an object"]
    );
    assert_eq!(s.core.schedule().tasks().len(), 3);
    assert_eq!(s.core.error(), Some("Item 0 is not an object"));
    assert_eq!(
        s.core.snapshot().error.as_deref(),
        Some("Item 0 is not an object")
    );

    s.step(RuntimeEvent::PlanLoaded {
        source: "good.json".to_string(),
        tasks: side_lane(),
    });
    assert_eq!(s.core.error(), None);
}

#[test]
fn quit_and_shutdown_stop_the_loop() {
    let mut s = plain_session();

    let step = s.input("quit");
    assert!(!step.keep_running);
    assert!(matches!(step.commands.as_slice(), [CoreCommand::RequestExit]));

    let step = s.step(RuntimeEvent::ShutdownRequested);
    assert!(!step.keep_running);
}
