// tests/row_packing.rs

mod common;
use crate::common::init_tracing;

use cookplan::schedule::{group_by_lane, max_overlap, pack_lane, pack_rows};
use cookplan_test_utils::builders::{PlanBuilder, side_lane};

fn row_of(packed: &[cookplan::schedule::AssignedTask], id: &str) -> usize {
    packed
        .iter()
        .find(|a| a.task.id == id)
        .map(|a| a.row)
        .unwrap_or_else(|| panic!("task {id} not packed"))
}

#[test]
fn long_task_pushes_overlapping_ones_to_second_row() {
    init_tracing();

    let (packed, rows) = pack_rows(side_lane());

    assert_eq!(rows, 2);
    assert_eq!(row_of(&packed, "A"), 0);
    assert_eq!(row_of(&packed, "B"), 1);
    // B ends at 15, C starts at 16: C reuses row 1.
    assert_eq!(row_of(&packed, "C"), 1);
}

#[test]
fn touching_intervals_share_a_row() {
    let tasks = PlanBuilder::new()
        .task("first", "L", 0.0, 10.0)
        .task("second", "L", 10.0, 5.0)
        .build();

    let (packed, rows) = pack_rows(tasks);

    assert_eq!(rows, 1);
    assert_eq!(row_of(&packed, "first"), 0);
    assert_eq!(row_of(&packed, "second"), 0);
}

#[test]
fn packing_order_is_start_then_duration_then_dataset_order() {
    let tasks = PlanBuilder::new()
        .task("late", "L", 7.0, 1.0)
        .task("long", "L", 0.0, 9.0)
        .task("short", "L", 0.0, 2.0)
        .task("short-twin", "L", 0.0, 2.0)
        .build();

    let (packed, rows) = pack_rows(tasks);
    let order: Vec<&str> = packed.iter().map(|a| a.task.id.as_str()).collect();

    assert_eq!(order, vec!["short", "short-twin", "long", "late"]);
    assert_eq!(rows, 3);
    assert_eq!(row_of(&packed, "short"), 0);
    assert_eq!(row_of(&packed, "short-twin"), 1);
    assert_eq!(row_of(&packed, "long"), 2);
    // "short" ended at 2, so row 0 is free again by minute 7.
    assert_eq!(row_of(&packed, "late"), 0);
}

#[test]
fn empty_lane_has_no_rows() {
    let (packed, rows) = pack_rows(Vec::new());
    assert!(packed.is_empty());
    assert_eq!(rows, 0);
}

#[test]
fn lanes_are_grouped_and_sorted_by_name() {
    let tasks = PlanBuilder::new()
        .task("m1", "Main", 0.0, 5.0)
        .task("d1", "Dessert", 0.0, 5.0)
        .task("m2", "Main", 2.0, 5.0)
        .task("a1", "Appetizer", 1.0, 1.0)
        .build();

    let lanes = group_by_lane(&tasks);
    let names: Vec<&str> = lanes.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Appetizer", "Dessert", "Main"]);

    let main = lanes
        .into_iter()
        .find(|l| l.name == "Main")
        .map(pack_lane)
        .expect("Main lane");
    assert_eq!(main.rows, 2);
    assert_eq!(main.task_ids().collect::<Vec<_>>(), vec!["m1", "m2"]);
}

#[test]
fn max_overlap_treats_intervals_as_half_open() {
    let tasks = PlanBuilder::new()
        .task("a", "L", 0.0, 10.0)
        .task("b", "L", 10.0, 10.0)
        .task("c", "L", 5.0, 10.0)
        .build();

    assert_eq!(max_overlap(&tasks), 2);
    assert_eq!(max_overlap(&side_lane()), 2);
    assert_eq!(max_overlap(&[]), 0);
}
