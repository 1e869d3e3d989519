// src/plan/demo.rs

use crate::plan::model::Task;

/// Built-in plan shown when no dataset is given: a steak dinner with a
/// roasted side and a salad.
pub fn demo_plan() -> Vec<Task> {
    [
        (
            "preheat_oven",
            "Side – Roasted Veg",
            "Preheat oven to 425F",
            0.0,
            65.0,
            "Move rack to middle. Put sheet pan in oven to preheat.",
        ),
        (
            "cut_veg",
            "Side – Roasted Veg",
            "Cut vegetables",
            3.0,
            12.0,
            "Cut into 1-inch chunks. Toss with oil/salt.",
        ),
        (
            "roast_veg",
            "Side – Roasted Veg",
            "Roast vegetables",
            16.0,
            30.0,
            "Spread on hot pan, stir at 15 min.",
        ),
        (
            "sear_steaks",
            "Main – Ribeye",
            "Sear steaks",
            25.0,
            8.0,
            "Pat dry. Heat pan until just smoking. 2–3 min/side. Rest 5 min.",
        ),
        (
            "make_pan_sauce",
            "Main – Ribeye",
            "Make pan sauce",
            33.0,
            10.0,
            "Deglaze with stock/wine, reduce, finish with butter.",
        ),
        (
            "greens_salad",
            "Salad",
            "Dress greens",
            40.0,
            66.0,
            "Toss just before serving.",
        ),
    ]
    .into_iter()
    .map(|(id, lane, title, start_min, duration_min, description)| Task {
        id: id.to_string(),
        lane: lane.to_string(),
        title: title.to_string(),
        start_min,
        duration_min,
        description: description.to_string(),
    })
    .collect()
}
