// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [layout]
/// row_height = 48.0
/// px_per_minute = 12.0
///
/// [clock]
/// sample_interval_ms = 250
///
/// [timers]
/// initial = 3
///
/// [[person]]
/// name = "Tim"
/// color = "#fe9b22"
/// ```
///
/// All sections are optional and have the defaults used by the chart.
/// Without any `[[person]]` entries the roster starts with Tim and Tiff;
/// write `person = []` for an empty roster.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub layout: LayoutSection,

    #[serde(default)]
    pub clock: ClockSection,

    #[serde(default)]
    pub timers: TimersSection,

    /// Initial people roster, in insertion order.
    #[serde(default = "default_people")]
    pub person: Vec<PersonConfig>,
}

impl Default for RawConfigFile {
    fn default() -> Self {
        Self {
            layout: LayoutSection::default(),
            clock: ClockSection::default(),
            timers: TimersSection::default(),
            person: default_people(),
        }
    }
}

fn default_people() -> Vec<PersonConfig> {
    [("Tim", "#fe9b22"), ("Tiff", "#3e9751")]
        .into_iter()
        .map(|(name, color)| PersonConfig {
            name: name.to_string(),
            color: Some(color.to_string()),
        })
        .collect()
}

/// Validated configuration. Only constructible through
/// `ConfigFile::try_from(RawConfigFile)` or [`ConfigFile::default`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub layout: LayoutSection,
    pub clock: ClockSection,
    pub timers: TimersSection,
    pub person: Vec<PersonConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            layout: raw.layout,
            clock: raw.clock,
            timers: raw.timers,
            person: raw.person,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(RawConfigFile::default())
    }
}

/// `[layout]` section: geometry constants in pixels (and minutes for the
/// tick interval).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutSection {
    pub row_height: f64,
    pub row_gap: f64,
    pub lane_padding: f64,
    pub px_per_minute: f64,
    pub label_width: f64,
    pub top_axis_padding: f64,
    /// Bars never render narrower than this.
    pub min_bar_width: f64,
    pub min_canvas_width: f64,
    pub tick_interval_min: u32,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            row_height: 48.0,
            row_gap: 6.0,
            lane_padding: 12.0,
            px_per_minute: 12.0,
            label_width: 180.0,
            top_axis_padding: 80.0,
            min_bar_width: 2.0,
            min_canvas_width: 800.0,
            tick_interval_min: 5,
        }
    }
}

/// `[clock]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClockSection {
    /// How often the shell samples the clock for the moving marker.
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,
}

fn default_sample_interval_ms() -> u64 {
    250
}

impl Default for ClockSection {
    fn default() -> Self {
        Self {
            sample_interval_ms: default_sample_interval_ms(),
        }
    }
}

/// `[timers]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimersSection {
    /// Number of idle timers in the bank at startup.
    #[serde(default = "default_initial_timers")]
    pub initial: usize,
}

fn default_initial_timers() -> usize {
    3
}

impl Default for TimersSection {
    fn default() -> Self {
        Self {
            initial: default_initial_timers(),
        }
    }
}

/// `[[person]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonConfig {
    pub name: String,

    /// Explicit display color; if `None`, the palette color for the
    /// person's position is used.
    #[serde(default)]
    pub color: Option<String>,
}
