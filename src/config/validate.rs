// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{CookplanError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::CookplanError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_layout(cfg)?;
    validate_clock(cfg)?;
    validate_people(cfg)?;
    Ok(())
}

fn validate_layout(cfg: &RawConfigFile) -> Result<()> {
    let l = &cfg.layout;

    let positive = [
        ("row_height", l.row_height),
        ("px_per_minute", l.px_per_minute),
    ];
    for (key, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(CookplanError::ConfigError(format!(
                "[layout].{key} must be > 0 (got {value})"
            )));
        }
    }

    let non_negative = [
        ("row_gap", l.row_gap),
        ("lane_padding", l.lane_padding),
        ("label_width", l.label_width),
        ("top_axis_padding", l.top_axis_padding),
        ("min_bar_width", l.min_bar_width),
        ("min_canvas_width", l.min_canvas_width),
    ];
    for (key, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(CookplanError::ConfigError(format!(
                "[layout].{key} must be >= 0 (got {value})"
            )));
        }
    }

    if l.tick_interval_min == 0 {
        return Err(CookplanError::ConfigError(
            "[layout].tick_interval_min must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_clock(cfg: &RawConfigFile) -> Result<()> {
    if cfg.clock.sample_interval_ms == 0 {
        return Err(CookplanError::ConfigError(
            "[clock].sample_interval_ms must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_people(cfg: &RawConfigFile) -> Result<()> {
    for (idx, person) in cfg.person.iter().enumerate() {
        if person.name.trim().is_empty() {
            return Err(CookplanError::ConfigError(format!(
                "[[person]] entry {idx} has a blank name"
            )));
        }
        if let Some(color) = &person.color {
            if !color.starts_with('#') {
                return Err(CookplanError::ConfigError(format!(
                    "person '{}' has color '{}' (expected a '#rrggbb' value)",
                    person.name, color
                )));
            }
        }
    }
    Ok(())
}
