use proptest::prelude::*;

use cookplan::plan::Task;
use cookplan::schedule::{max_overlap, pack_rows};
use cookplan_test_utils::builders::TaskBuilder;

// Whole and half minutes keep plenty of exact ties and touching edges.
fn lane_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<Task>> {
    proptest::collection::vec((0u32..120, 1u32..60), 0..=max_tasks).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (start, dur))| {
                TaskBuilder::new(
                    &format!("task_{i}"),
                    "Lane",
                    f64::from(start) / 2.0,
                    f64::from(dur) / 2.0,
                )
                .build()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn row_count_equals_peak_overlap(tasks in lane_strategy(25)) {
        let peak = max_overlap(&tasks);
        let (_, rows) = pack_rows(tasks);
        prop_assert_eq!(rows, peak);
    }

    #[test]
    fn tasks_in_the_same_row_never_overlap(tasks in lane_strategy(25)) {
        let (packed, rows) = pack_rows(tasks);

        for row in 0..rows {
            let in_row: Vec<&Task> = packed
                .iter()
                .filter(|a| a.row == row)
                .map(|a| &a.task)
                .collect();
            for (i, a) in in_row.iter().enumerate() {
                for b in &in_row[i + 1..] {
                    prop_assert!(!a.overlaps(b), "{} overlaps {} in row {}", a.id, b.id, row);
                }
            }
        }
    }

    #[test]
    fn every_task_is_packed_exactly_once(tasks in lane_strategy(25)) {
        let mut expected: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
        let (packed, rows) = pack_rows(tasks);

        let mut got: Vec<String> = packed.iter().map(|a| a.task.id.clone()).collect();
        expected.sort();
        got.sort();
        prop_assert_eq!(got, expected);
        prop_assert!(packed.iter().all(|a| a.row < rows));
    }
}
